use rand::Rng;
use std::collections::VecDeque;

/// Colors drawn per palette refill. Streams with more polygons than this
/// roll over into a fresh batch.
pub const PALETTE_SIZE: usize = 20;

/// An RGB fill color with components in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl FillColor {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// 8-bit components for the raster backend.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }
}

/// An ephemeral stock of fill colors. Each refill discards whatever was
/// left and draws `PALETTE_SIZE` fresh random colors; colors are then
/// consumed front to back, one per polygon, and never reused.
#[derive(Debug, Default)]
pub struct Palette {
    remaining: VecDeque<FillColor>,
}

impl Palette {
    /// Starts exhausted; the first `next_color` call triggers a refill.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Throw away any leftover colors and draw a fresh batch.
    pub fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.remaining = (0..PALETTE_SIZE)
            .map(|_| {
                FillColor::new(
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                )
            })
            .collect();
    }

    /// Take the next unused color, refilling first if the stock ran out.
    pub fn next_color<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FillColor {
        if self.remaining.is_empty() {
            self.refill(rng);
        }
        // PALETTE_SIZE is non-zero, so the refilled queue cannot be empty.
        self.remaining.pop_front().expect("palette refill is non-empty")
    }
}
