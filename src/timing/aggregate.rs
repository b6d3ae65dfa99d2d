use anyhow::{Context, Result, bail};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::corpus::corpus_file_path;
use crate::domain::TimingRecord;
use crate::stream::parse_timing;

/// Collect `(vertex_count, seconds)` pairs from the decomposition files
/// under `input_root`, reading the elapsed time off the last line of each.
///
/// Absent files are skipped; the grid is walked in ascending `vertex_count`
/// then ascending instance, so records come back ordered for plotting. A
/// file that exists but is empty or ends on a non-numeric line is an error.
pub fn aggregate_timings(
    vertex_counts: RangeInclusive<u32>,
    instances: u32,
    input_root: &Path,
) -> Result<Vec<TimingRecord>> {
    let mut records = Vec::new();
    for vertex_count in vertex_counts {
        for instance in 1..=instances {
            let path = corpus_file_path(input_root, vertex_count, instance);
            if !path.exists() {
                continue;
            }
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read decomposition file: {}", path.display()))?;
            let Some(last_line) = contents.lines().last() else {
                bail!("Decomposition file has no timing line: {}", path.display());
            };
            let seconds = parse_timing(last_line)
                .with_context(|| format!("Failed to parse timing line of {}", path.display()))?;
            records.push(TimingRecord::new(vertex_count, seconds));
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_decomposition(root: &Path, vertex_count: u32, instance: u32, seconds: &str) {
        let path = corpus_file_path(root, vertex_count, instance);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let body = format!("0.1,0.2\n0.3,0.4\n0.2,0.6\n\n{}\n", seconds);
        fs::write(&path, body).unwrap();
    }

    #[test]
    fn test_aggregate_reads_last_line_in_grid_order() {
        let dir = tempdir().unwrap();
        write_decomposition(dir.path(), 8, 1, "1.2");
        write_decomposition(dir.path(), 9, 1, "3.4");
        write_decomposition(dir.path(), 10, 1, "0.9");

        let records = aggregate_timings(8..=10, 1, dir.path()).unwrap();
        assert_eq!(
            records,
            vec![
                TimingRecord::new(8, 1.2),
                TimingRecord::new(9, 3.4),
                TimingRecord::new(10, 0.9),
            ]
        );
    }

    #[test]
    fn test_aggregate_orders_instances_within_a_count() {
        let dir = tempdir().unwrap();
        write_decomposition(dir.path(), 4, 2, "0.75");
        write_decomposition(dir.path(), 4, 1, "0.5");

        let records = aggregate_timings(4..=4, 2, dir.path()).unwrap();
        assert_eq!(
            records,
            vec![TimingRecord::new(4, 0.5), TimingRecord::new(4, 0.75)]
        );
    }

    #[test]
    fn test_aggregate_skips_missing_files() {
        let dir = tempdir().unwrap();
        write_decomposition(dir.path(), 10, 2, "0.125");

        let records = aggregate_timings(4..=250, 10, dir.path()).unwrap();
        assert_eq!(records, vec![TimingRecord::new(10, 0.125)]);
    }

    #[test]
    fn test_aggregate_empty_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = corpus_file_path(dir.path(), 5, 1);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();

        let err = aggregate_timings(5..=5, 1, dir.path()).unwrap_err();
        assert!(err.to_string().contains("no timing line"));
    }

    #[test]
    fn test_aggregate_non_numeric_tail_is_an_error() {
        let dir = tempdir().unwrap();
        write_decomposition(dir.path(), 5, 1, "timed out");

        assert!(aggregate_timings(5..=5, 1, dir.path()).is_err());
    }
}
