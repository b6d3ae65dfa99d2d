//! Path conventions for the corpus tree.
//!
//! Every tool in the pipeline addresses files the same way: polygon `j` of
//! vertex count `n` lives at `<root>/<n>/<n>_<j>.txt`, and its rendered
//! image at `<root>/<n>/<n>_<j>.png`. Instance numbering starts at 1.

use std::path::{Path, PathBuf};

/// Corpus/decomposition text file for `(vertex_count, instance)`.
pub fn corpus_file_path(root: &Path, vertex_count: u32, instance: u32) -> PathBuf {
    root.join(vertex_count.to_string())
        .join(format!("{}_{}.txt", vertex_count, instance))
}

/// Rendered image for `(vertex_count, instance)`.
pub fn image_file_path(root: &Path, vertex_count: u32, instance: u32) -> PathBuf {
    root.join(vertex_count.to_string())
        .join(format!("{}_{}.png", vertex_count, instance))
}
