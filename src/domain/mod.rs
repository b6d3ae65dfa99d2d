pub mod polygon;
pub mod timing;

pub use polygon::SimplePolygon;
pub use timing::TimingRecord;
