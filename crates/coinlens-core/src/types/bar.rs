//! Daily OHLCV bar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One trading day's price/volume record.
/// Uses f64 throughout for fast derived-series computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Calendar date, the ordering key
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded quantity
    pub volume: f64,
}

impl DailyBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Notional value traded: open price times volume.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.open * self.volume
    }

    /// The bar's range (high - low).
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Absolute difference between open and close.
    #[inline]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Check if the bar is bullish (close > open).
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if the bar is bearish (close < open).
    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Validate price and volume bounds.
    ///
    /// Prices must be positive and finite, volume non-negative, and both
    /// open and close must lie inside `[low, high]`.
    pub fn validate(&self) -> Result<(), DataError> {
        let invalid = |reason: &str| DataError::InvalidBar {
            date: self.date,
            reason: reason.to_string(),
        };

        let prices = [self.open, self.high, self.low, self.close];
        if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return Err(invalid("prices must be positive and finite"));
        }
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(invalid("volume must be non-negative and finite"));
        }
        if self.low > self.high {
            return Err(invalid("low exceeds high"));
        }
        if self.open < self.low || self.open > self.high {
            return Err(invalid("open outside [low, high]"));
        }
        if self.close < self.low || self.close > self.high {
            return Err(invalid("close outside [low, high]"));
        }
        Ok(())
    }
}
