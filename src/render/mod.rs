pub mod batch;
pub mod machine;
pub mod palette;
pub mod raster;

pub use batch::{RenderSummary, render_all, render_file};
pub use machine::{FillCommand, PolygonSink, render_lines};
pub use palette::{FillColor, PALETTE_SIZE, Palette};
pub use raster::{Bounds, write_raster};
