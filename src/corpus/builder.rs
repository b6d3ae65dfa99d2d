use anyhow::Result;
use rand::Rng;
use std::ops::RangeInclusive;
use std::path::Path;

use super::layout::corpus_file_path;
use super::writer::write_corpus_file;
use crate::geometry::PolygonGenerator;

/// Drives `PolygonGenerator` across a band of vertex counts and writes the
/// results into the corpus tree.
#[derive(Debug, Clone, Default)]
pub struct CorpusBuilder {
    generator: PolygonGenerator,
}

impl CorpusBuilder {
    pub fn new(generator: PolygonGenerator) -> Self {
        Self { generator }
    }

    /// Generate `instances` polygons for every vertex count in the band and
    /// write each to `corpus_file_path(output_root, n, j)`. Files are
    /// produced in ascending `n`, then ascending `j` (numbered from 1), so
    /// interrupted runs leave a recognizable prefix of the corpus.
    ///
    /// Returns the number of files written. Generation failure or an
    /// unwritable file aborts the run with the partial output left in place.
    pub fn build<R: Rng + ?Sized>(
        &self,
        vertex_counts: RangeInclusive<u32>,
        instances: u32,
        output_root: &Path,
        rng: &mut R,
    ) -> Result<usize> {
        let mut written = 0;
        for vertex_count in vertex_counts {
            for instance in 1..=instances {
                let polygon = self.generator.generate(vertex_count as usize, rng)?;
                let path = corpus_file_path(output_root, vertex_count, instance);
                write_corpus_file(&path, &polygon)?;
                written += 1;
            }
        }
        Ok(written)
    }
}
