//! Derived time-series metrics for daily price history.
//!
//! This crate provides the numerical core of the toolkit:
//! - Trailing moving average with a shrinking warmup window
//! - Simple daily returns and compounded cumulative return
//! - Notional traded value and argmax lookups
//! - Descriptive summaries and (partial) autocorrelation of a series
//!
//! All computations are pure, sequential, and deterministic: the same
//! input column always produces bit-identical output. Missing entries are
//! `None`, never NaN sentinels.

pub mod correlation;
pub mod extrema;
pub mod notional;
pub mod pipeline;
pub mod returns;
pub mod rolling;
pub mod summary;

pub use correlation::{autocorrelation, partial_autocorrelation};
pub use extrema::{argmax, argmax_index};
pub use notional::notional_traded;
pub use pipeline::{DerivedSeries, MetricsPipeline};
pub use returns::{CumulativeReturn, SimpleReturns};
pub use rolling::RollingMean;
pub use summary::SeriesSummary;
