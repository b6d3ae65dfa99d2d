use anyhow::{Context, Result};
use rand::Rng;

use super::palette::{FillColor, Palette};
use crate::stream::{Record, classify_line};

/// Receives polygon fill events from the stream state machine.
///
/// The rasterizer collects events into `FillCommand`s so it can size the
/// canvas before drawing; tests record them directly.
pub trait PolygonSink {
    /// Fill the polygon given by `ring` with `color`. The ring is open
    /// (closing edge implicit) and may be empty on the final flush of a
    /// stream that ends on a separator.
    fn fill(&mut self, ring: &[(f64, f64)], color: FillColor);
}

/// One polygon fill captured for later rasterization.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCommand {
    pub ring: Vec<(f64, f64)>,
    pub color: FillColor,
}

impl PolygonSink for Vec<FillCommand> {
    fn fill(&mut self, ring: &[(f64, f64)], color: FillColor) {
        self.push(FillCommand {
            ring: ring.to_vec(),
            color,
        });
    }
}

/// Drive the renderer state machine over the lines of one decomposition
/// stream, emitting one fill per separator plus a mandatory final flush.
///
/// Rules, in order, for each line:
/// - separator: pop a palette color (refilling first when exhausted), emit
///   the accumulated ring, and reset it;
/// - coordinate: append the vertex to the ring in progress;
/// - opaque line (no comma, e.g. the trailing timing line): skip it;
/// - then, if the ring is non-empty and the palette is exhausted, refill it
///   eagerly so a color is already reserved for the pending polygon.
///
/// After the last line the ring is flushed unconditionally, even when
/// empty, so a stream ending on a separator still emits a trailing empty
/// fill. State lives entirely in this call; every stream starts from an
/// empty ring and an exhausted palette.
pub fn render_lines<'a, S, R>(
    lines: impl IntoIterator<Item = &'a str>,
    sink: &mut S,
    rng: &mut R,
) -> Result<()>
where
    S: PolygonSink + ?Sized,
    R: Rng + ?Sized,
{
    let mut ring: Vec<(f64, f64)> = Vec::new();
    let mut palette = Palette::new();

    for (index, line) in lines.into_iter().enumerate() {
        let record = classify_line(line).with_context(|| format!("Line {}", index + 1))?;
        match record {
            Record::Separator => {
                sink.fill(&ring, palette.next_color(rng));
                ring.clear();
            }
            Record::Coordinate { x, y } => ring.push((x, y)),
            Record::Opaque(_) => {}
        }
        if !ring.is_empty() && palette.is_empty() {
            palette.refill(rng);
        }
    }

    sink.fill(&ring, palette.next_color(rng));
    Ok(())
}
