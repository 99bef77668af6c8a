//! Data ingestion for the analysis toolkit.

mod csv_source;

pub use csv_source::CsvSource;

use coinlens_core::error::DataError;
use coinlens_core::types::PriceHistory;

/// Load a validated price history from a CSV file.
pub fn load_csv(path: &str, symbol: &str) -> Result<PriceHistory, DataError> {
    let source = CsvSource::new(path)?;
    source.load(symbol)
}
