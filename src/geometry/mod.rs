pub mod generator;
pub mod sampler;
pub mod validity;

pub use generator::{DEFAULT_MAX_ATTEMPTS, PolygonGenerator};
pub use sampler::sample_ring;
pub use validity::is_simple_ring;
