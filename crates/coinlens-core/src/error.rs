//! Error types for the analysis toolkit.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level analysis error.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Data ingestion and validation errors.
///
/// All of these are fatal: the pipeline refuses to compute derived
/// columns from input that fails validation.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available at the requested path")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Dates not strictly increasing: {prev} followed by {next}")]
    NonMonotonicDate { prev: NaiveDate, next: NaiveDate },

    #[error("Duplicate date: {0}")]
    DuplicateDate(NaiveDate),

    #[error("Invalid bar on {date}: {reason}")]
    InvalidBar { date: NaiveDate, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Metric computation errors.
///
/// Missing values inside a series are not errors; they travel as `None`
/// entries. These variants cover structurally impossible requests.
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Shape mismatch: left has {left} rows, right has {right}")]
    ShapeMismatch { left: usize, right: usize },

    #[error("Series has no defined values")]
    EmptySeries,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn load() -> AnalysisResult<()> {
        Err(DataError::NoDataAvailable)?
    }

    fn compute() -> AnalysisResult<()> {
        Err(MetricsError::EmptySeries)?
    }

    #[test]
    fn test_error_conversions() {
        assert!(matches!(load().unwrap_err(), AnalysisError::Data(_)));
        assert!(matches!(compute().unwrap_err(), AnalysisError::Metrics(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::from(MetricsError::ShapeMismatch { left: 3, right: 2 });
        assert!(err.to_string().contains("3 rows"));
        assert!(compute().unwrap_err().to_string().contains("no defined values"));
    }
}
