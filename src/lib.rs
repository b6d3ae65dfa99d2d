//! decompbench - Corpus generation, rendering, and timing plots for
//! polygon decomposition benchmarks

pub mod corpus;
pub mod domain;
pub mod geometry;
pub mod render;
pub mod stream;
pub mod timing;
