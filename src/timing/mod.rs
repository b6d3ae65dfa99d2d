pub mod aggregate;
pub mod plot;

pub use aggregate::aggregate_timings;
pub use plot::plot_timings;
