pub mod builder;
pub mod layout;
pub mod writer;

pub use builder::CorpusBuilder;
pub use layout::{corpus_file_path, image_file_path};
pub use writer::write_corpus_file;
