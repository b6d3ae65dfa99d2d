use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::Path;

use crate::domain::TimingRecord;
use crate::render::raster::{Bounds, draw_dotted_grid};

const PLOT_WIDTH_PX: u32 = 1280;
const PLOT_HEIGHT_PX: u32 = 960;

/// Matplotlib's default first-series blue.
const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Fraction of the data span left as margin on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Plot elapsed seconds against vertex count: records in scan order joined
/// by a thin line, dotted grid, labeled axes.
pub fn plot_timings(records: &[TimingRecord], path: &Path) -> Result<()> {
    let (min_x, max_x) = padded_range(records.iter().map(|r| r.vertex_count as f64));
    let (min_y, max_y) = padded_range(records.iter().map(|r| r.seconds));

    let root = BitMapBackend::new(path, (PLOT_WIDTH_PX, PLOT_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(24)
        .x_label_area_size(56)
        .y_label_area_size(72)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Number of Vertices (n)")
        .y_desc("Time (s)")
        .draw()?;

    let viewport = Bounds {
        min_x,
        max_x,
        min_y,
        max_y,
    };
    draw_dotted_grid(&mut chart, &viewport)?;
    chart.draw_series(LineSeries::new(
        records.iter().map(|r| (r.vertex_count as f64, r.seconds)),
        CURVE_COLOR.stroke_width(1),
    ))?;

    root.present()
        .with_context(|| format!("Failed to write plot: {}", path.display()))?;
    Ok(())
}

/// Tight extent of `values` widened by `AXIS_MARGIN` on each side. Empty
/// input falls back to the unit range; a single value gets half a unit of
/// slack each way.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut bounds: Option<(f64, f64)> = None;
    for value in values {
        bounds = match bounds {
            None => Some((value, value)),
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
        };
    }
    match bounds {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
        Some((lo, hi)) => {
            let margin = (hi - lo) * AXIS_MARGIN;
            (lo - margin, hi + margin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_plot_timings_produces_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curve.png");
        let records = vec![
            TimingRecord::new(8, 0.012),
            TimingRecord::new(9, 0.019),
            TimingRecord::new(10, 0.031),
        ];

        plot_timings(&records, &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_plot_timings_with_no_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");
        plot_timings(&[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_padded_range_widens_both_sides() {
        // Span 246, so each margin is 12.3.
        let (lo, hi) = padded_range([4.0, 250.0].into_iter());
        assert!((lo + 8.3).abs() < 1e-9);
        assert!((hi - 262.3).abs() < 1e-9);
    }

    #[test]
    fn test_padded_range_single_value() {
        assert_eq!(padded_range([7.0].into_iter()), (6.5, 7.5));
    }

    #[test]
    fn test_padded_range_empty_is_unit() {
        assert_eq!(padded_range(std::iter::empty()), (0.0, 1.0));
    }
}
