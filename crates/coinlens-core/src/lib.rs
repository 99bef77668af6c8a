//! Core types and traits for the analysis toolkit.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (DailyBar, PriceHistory)
//! - The Metric trait implemented by derived-series computations
//! - The error taxonomy shared across the workspace

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AnalysisError, AnalysisResult, DataError, MetricsError};
pub use traits::*;
pub use types::*;
