use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use super::machine::{FillCommand, render_lines};
use super::raster::write_raster;
use crate::corpus::{corpus_file_path, image_file_path};

/// Outcome of a batch render walk.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RenderSummary {
    pub rendered: usize,
    pub skipped: usize,
}

/// Render one decomposition stream file to a raster image. Parser state is
/// local to the call, so consecutive files never bleed rings or palette
/// colors into each other.
pub fn render_file<R: Rng + ?Sized>(input: &Path, output: &Path, rng: &mut R) -> Result<()> {
    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read stream file: {}", input.display()))?;
    let mut fills: Vec<FillCommand> = Vec::new();
    render_lines(contents.lines(), &mut fills, rng)
        .with_context(|| format!("Failed to parse stream file: {}", input.display()))?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    write_raster(output, &fills)
}

/// Walk the `(vertex_count, instance)` grid and render every decomposition
/// file found under `input_root` to the mirrored path under `output_root`.
///
/// Absent input files are counted and skipped; sparse corpora are normal.
/// Any error on a file that does exist aborts the walk.
pub fn render_all<R: Rng + ?Sized>(
    vertex_counts: RangeInclusive<u32>,
    instances: u32,
    input_root: &Path,
    output_root: &Path,
    rng: &mut R,
) -> Result<RenderSummary> {
    let mut summary = RenderSummary::default();
    for vertex_count in vertex_counts {
        for instance in 1..=instances {
            let input = corpus_file_path(input_root, vertex_count, instance);
            if !input.exists() {
                summary.skipped += 1;
                continue;
            }
            let output = image_file_path(output_root, vertex_count, instance);
            render_file(&input, &output, rng)?;
            summary.rendered += 1;
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    const STREAM: &str = "0.0,0.0\n1.0,0.0\n0.5,1.0\n\n2.0,0.0\n3.0,0.0\n2.5,1.0\n\n0.0241\n";

    #[test]
    fn test_render_file_writes_image() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("output.txt");
        let output = dir.path().join("output.png");
        fs::write(&input, STREAM).unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        render_file(&input, &output, &mut rng).unwrap();
        assert!(output.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_render_file_missing_input_is_an_error() {
        let dir = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let err = render_file(
            &dir.path().join("absent.txt"),
            &dir.path().join("absent.png"),
            &mut rng,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("absent.txt"));
    }

    #[test]
    fn test_render_all_skips_missing_instances() {
        let dir = tempdir().unwrap();
        let input_root = dir.path().join("decomposed");
        let output_root = dir.path().join("images_output");
        let present = corpus_file_path(&input_root, 8, 1);
        fs::create_dir_all(present.parent().unwrap()).unwrap();
        fs::write(&present, STREAM).unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        let summary = render_all(8..=9, 2, &input_root, &output_root, &mut rng).unwrap();

        assert_eq!(summary.rendered, 1);
        assert_eq!(summary.skipped, 3);
        assert!(image_file_path(&output_root, 8, 1).exists());
        assert!(!image_file_path(&output_root, 8, 2).exists());
    }

    #[test]
    fn test_render_all_propagates_parse_failures() {
        let dir = tempdir().unwrap();
        let input_root = dir.path().join("decomposed");
        let output_root = dir.path().join("images_output");
        let broken = corpus_file_path(&input_root, 8, 1);
        fs::create_dir_all(broken.parent().unwrap()).unwrap();
        fs::write(&broken, "1.0,nope\n").unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        assert!(render_all(8..=8, 1, &input_root, &output_root, &mut rng).is_err());
    }
}
