//! Core trait definitions.

mod metric;

pub use metric::Metric;
