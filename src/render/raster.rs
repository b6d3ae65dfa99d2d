use anyhow::{Context, Result};
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

use super::machine::FillCommand;

/// Longest canvas side in pixels. The short side follows the data aspect
/// ratio, so squares raster square.
const RASTER_LONG_SIDE_PX: u32 = 2048;

/// Outline width for polygon edges.
const EDGE_STROKE_PX: u32 = 2;

/// Grid line color, a light neutral gray that reads under any fill.
const GRID_GRAY: RGBColor = RGBColor(176, 176, 176);

/// Rough tick count per axis for the dotted grid.
const GRID_TICKS: usize = 8;

/// Axis-aligned extent of the filled geometry, in stream coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Tight bounds of a point cloud, or `None` when it is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut bounds: Option<Bounds> = None;
        for (x, y) in points {
            match &mut bounds {
                None => {
                    bounds = Some(Bounds {
                        min_x: x,
                        max_x: x,
                        min_y: y,
                        max_y: y,
                    });
                }
                Some(b) => {
                    b.min_x = b.min_x.min(x);
                    b.max_x = b.max_x.max(x);
                    b.min_y = b.min_y.min(y);
                    b.max_y = b.max_y.max(y);
                }
            }
        }
        bounds
    }

    /// Viewport for streams with nothing to draw.
    pub fn unit_square() -> Self {
        Bounds {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        }
    }

    /// Grow any zero-extent axis by half a unit each way so a lone point or
    /// a degenerate segment still gets a drawable viewport.
    pub fn pad_degenerate(mut self) -> Self {
        if self.width() == 0.0 {
            self.min_x -= 0.5;
            self.max_x += 0.5;
        }
        if self.height() == 0.0 {
            self.min_y -= 0.5;
            self.max_y += 0.5;
        }
        self
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Canvas dimensions preserving the data aspect ratio, long side fixed.
fn canvas_size(bounds: &Bounds) -> (u32, u32) {
    let width = bounds.width();
    let height = bounds.height();
    let long = RASTER_LONG_SIDE_PX as f64;
    if width >= height {
        let short = ((long * height / width).round() as u32).max(1);
        (RASTER_LONG_SIDE_PX, short)
    } else {
        let short = ((long * width / height).round() as u32).max(1);
        (short, RASTER_LONG_SIDE_PX)
    }
}

/// Tick positions covering `[min, max]` at a round step from the 1/2/5
/// ladder, aiming for roughly `target` ticks.
fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || target == 0 {
        return Vec::new();
    }
    let raw_step = (max - min) / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = match raw_step / magnitude {
        n if n < 1.5 => magnitude,
        n if n < 3.5 => 2.0 * magnitude,
        n if n < 7.5 => 5.0 * magnitude,
        _ => 10.0 * magnitude,
    };
    let mut ticks = Vec::new();
    let mut tick = (min / step).ceil() * step;
    while tick <= max + step * 1e-9 {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

/// Overlay a dotted grid at nice tick positions across the chart viewport.
pub(crate) fn draw_dotted_grid(
    chart: &mut ChartContext<'_, BitMapBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    bounds: &Bounds,
) -> Result<()> {
    let style = GRID_GRAY.stroke_width(1);
    for x in nice_ticks(bounds.min_x, bounds.max_x, GRID_TICKS) {
        chart.draw_series(DashedLineSeries::new(
            vec![(x, bounds.min_y), (x, bounds.max_y)],
            1,
            4,
            style,
        ))?;
    }
    for y in nice_ticks(bounds.min_y, bounds.max_y, GRID_TICKS) {
        chart.draw_series(DashedLineSeries::new(
            vec![(bounds.min_x, y), (bounds.max_x, y)],
            1,
            4,
            style,
        ))?;
    }
    Ok(())
}

/// Rasterize collected fills to a PNG: tight bounds, 1:1 aspect, white
/// background, each polygon filled with its assigned color under a thin
/// black outline, dotted grid on top.
///
/// Streams with nothing drawable (only empty fills) still produce an image
/// of the bare grid over a unit viewport.
pub fn write_raster(path: &Path, fills: &[FillCommand]) -> Result<()> {
    let bounds = Bounds::from_points(fills.iter().flat_map(|f| f.ring.iter().copied()))
        .unwrap_or_else(Bounds::unit_square)
        .pad_degenerate();
    let (width_px, height_px) = canvas_size(&bounds);

    let root = BitMapBackend::new(path, (width_px, height_px)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(bounds.min_x..bounds.max_x, bounds.min_y..bounds.max_y)?;

    for fill in fills {
        let (r, g, b) = fill.color.to_rgb8();
        if fill.ring.len() >= 3 {
            chart
                .plotting_area()
                .draw(&Polygon::new(fill.ring.clone(), RGBColor(r, g, b).filled()))?;
        }
        if fill.ring.len() >= 2 {
            let mut outline = fill.ring.clone();
            outline.push(fill.ring[0]);
            chart
                .plotting_area()
                .draw(&PathElement::new(outline, BLACK.stroke_width(EDGE_STROKE_PX)))?;
        }
    }
    draw_dotted_grid(&mut chart, &bounds)?;

    root.present()
        .with_context(|| format!("Failed to write image: {}", path.display()))?;
    Ok(())
}
