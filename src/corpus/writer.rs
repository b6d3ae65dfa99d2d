use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::SimplePolygon;

/// Write one polygon in the corpus text format: a header line carrying the
/// vertex count, then one `x y` line per vertex in ring order. Parent
/// directories are created as needed.
pub fn write_corpus_file(path: &Path, polygon: &SimplePolygon) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create corpus file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", polygon.vertex_count())?;
    for &(x, y) in polygon.points() {
        writeln!(writer, "{} {}", x, y)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write corpus file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_corpus_file_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("8").join("8_1.txt");
        let polygon = SimplePolygon::new(vec![(0.25, 0.5), (0.75, 0.5), (0.5, 1.0)]);

        write_corpus_file(&path, &polygon).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "3");
        assert_eq!(lines[1], "0.25 0.5");
        assert_eq!(lines[2], "0.75 0.5");
        assert_eq!(lines[3], "0.5 1");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("12_1.txt");
        let polygon = SimplePolygon::new(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);

        write_corpus_file(&path, &polygon).unwrap();
        assert!(path.exists());
    }
}
