pub mod record;

pub use record::{Record, StreamError, classify_line, parse_timing};
