//! Validated, ordered price history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DailyBar;
use crate::error::DataError;

/// Immutable time-series container for daily bars.
///
/// Construction validates the ordering invariants: dates strictly
/// increasing, no duplicates, and every bar within price/volume bounds.
/// Out-of-order input is rejected rather than sorted, so that silently
/// shuffled source files cannot produce plausible-looking output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Symbol identifier, informational only
    pub symbol: String,
    bars: Vec<DailyBar>,
}

impl PriceHistory {
    /// Build a history from bars already ordered by date.
    pub fn try_new(symbol: impl Into<String>, bars: Vec<DailyBar>) -> Result<Self, DataError> {
        for bar in &bars {
            bar.validate()?;
        }
        for pair in bars.windows(2) {
            if pair[1].date == pair[0].date {
                return Err(DataError::DuplicateDate(pair[1].date));
            }
            if pair[1].date < pair[0].date {
                return Err(DataError::NonMonotonicDate {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the history is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&DailyBar> {
        self.bars.get(index)
    }

    /// Get the first bar.
    pub fn first(&self) -> Option<&DailyBar> {
        self.bars.first()
    }

    /// Get the last bar.
    pub fn last(&self) -> Option<&DailyBar> {
        self.bars.last()
    }

    /// Extract dates as a vector.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Extract open prices as a vector.
    pub fn opens(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    /// Extract high prices as a vector.
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Extract low prices as a vector.
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract volumes as a vector.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Bars strictly after `after` and up to and including `until`.
    ///
    /// `None` leaves the corresponding side unbounded. The asymmetric
    /// bounds match the date-window filter used when handing a sub-range
    /// to the candlestick renderer.
    pub fn between(&self, after: Option<NaiveDate>, until: Option<NaiveDate>) -> Vec<DailyBar> {
        self.bars
            .iter()
            .filter(|b| after.map_or(true, |a| b.date > a))
            .filter(|b| until.map_or(true, |u| b.date <= u))
            .copied()
            .collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &DailyBar> {
        self.bars.iter()
    }
}
