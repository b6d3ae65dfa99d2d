use anyhow::{Result, bail};
use rand::Rng;

use super::sampler::sample_ring;
use super::validity::is_simple_ring;
use crate::domain::SimplePolygon;

/// Default attempt cap per generated polygon. The angularly sorted sampler
/// is rejected only in degenerate configurations, so this is generous.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Produces simple polygons by rejection sampling: draw a candidate ring,
/// keep it if it passes `is_simple_ring`, otherwise resample. The attempt
/// cap applies per `generate` call.
#[derive(Debug, Clone)]
pub struct PolygonGenerator {
    max_attempts: usize,
}

impl Default for PolygonGenerator {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PolygonGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-call attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate one simple polygon with exactly `vertex_count` vertices.
    ///
    /// Fails when `vertex_count` is below 3 or when no candidate passes the
    /// simplicity check within the attempt cap.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        vertex_count: usize,
        rng: &mut R,
    ) -> Result<SimplePolygon> {
        if vertex_count < 3 {
            bail!("A polygon needs at least 3 vertices, got {}", vertex_count);
        }
        for _ in 0..self.max_attempts {
            let ring = sample_ring(vertex_count, rng);
            if is_simple_ring(&ring) {
                return Ok(SimplePolygon::new(ring));
            }
        }
        bail!(
            "No simple polygon with {} vertices found after {} attempts",
            vertex_count,
            self.max_attempts
        );
    }
}
