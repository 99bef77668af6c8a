//! CSV data source.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use coinlens_core::error::DataError;
use coinlens_core::types::{DailyBar, PriceHistory};

/// CSV record format.
///
/// Columns are matched by header name; anything not listed here, such as
/// an `Adj Close` column, is ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// CSV source for daily price history.
pub struct CsvSource {
    path: String,
}

impl CsvSource {
    /// Create a new CSV source.
    pub fn new(path: &str) -> Result<Self, DataError> {
        if !Path::new(path).exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Load and validate the full history.
    ///
    /// Rows are taken in file order. A file with shuffled or duplicated
    /// dates fails validation; it is not silently repaired by sorting.
    pub fn load(&self, symbol: &str) -> Result<PriceHistory, DataError> {
        let file = std::fs::File::open(&self.path)?;
        let bars = read_bars(file)?;
        debug!(count = bars.len(), path = %self.path, "loaded bars from csv");
        PriceHistory::try_new(symbol, bars)
    }
}

/// Parse bars out of CSV content.
fn read_bars<R: Read>(reader: R) -> Result<Vec<DailyBar>, DataError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut bars = Vec::new();
    for result in csv_reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
        let date = parse_date(&record.date)?;
        bars.push(DailyBar::new(
            date,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume,
        ));
    }

    Ok(bars)
}

/// Parse the date formats seen in exported price files.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    Err(DataError::Parse(format!(
        "Could not parse date: {}",
        date_str
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2021-04-01").is_ok());
        assert!(parse_date("2021/04/01").is_ok());
        assert!(parse_date("04/01/2021").is_ok());
        assert!(parse_date("01-04-2021").is_ok());
        assert!(parse_date("April 1st").is_err());
    }

    #[test]
    fn test_read_bars() {
        let data = "\
Date,Open,High,Low,Close,Volume
2021-04-01,100.0,110.0,95.0,105.0,1000
2021-04-02,105.0,112.0,101.0,111.0,1500
";
        let bars = read_bars(data.as_bytes()).unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, "2021-04-01".parse().unwrap());
        assert!((bars[1].close - 111.0).abs() < 1e-10);
    }

    #[test]
    fn test_read_bars_ignores_adj_close() {
        let data = "\
Date,Open,High,Low,Close,Adj Close,Volume
2021-04-01,100.0,110.0,95.0,105.0,104.2,1000
";
        let bars = read_bars(data.as_bytes()).unwrap();

        // Close comes from the Close column, never from Adj Close.
        assert!((bars[0].close - 105.0).abs() < 1e-10);
    }

    #[test]
    fn test_read_bars_unparseable_number_is_fatal() {
        let data = "\
Date,Open,High,Low,Close,Volume
2021-04-01,100.0,110.0,95.0,not-a-number,1000
";
        assert!(matches!(
            read_bars(data.as_bytes()),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn test_read_bars_unparseable_date_is_fatal() {
        let data = "\
Date,Open,High,Low,Close,Volume
sometime,100.0,110.0,95.0,105.0,1000
";
        assert!(matches!(
            read_bars(data.as_bytes()),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CsvSource::new("/nonexistent/prices.csv"),
            Err(DataError::NoDataAvailable)
        ));
    }
}
