//! Batch pipeline producing every derived column in one pass.

use coinlens_core::error::MetricsError;
use coinlens_core::traits::Metric;
use coinlens_core::types::PriceHistory;
use serde::{Deserialize, Serialize};

use crate::extrema::{argmax, argmax_index};
use crate::notional::notional_traded;
use crate::returns::{CumulativeReturn, SimpleReturns};
use crate::rolling::RollingMean;

/// Derived columns, aligned row-for-row with the input history.
///
/// Computed once from an immutable history; there is no incremental
/// update path, a new bar means a full recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedSeries {
    /// Trailing mean of close
    pub moving_average: Vec<Option<f64>>,
    /// Open price times volume
    pub notional_traded: Vec<f64>,
    /// Simple close-to-close returns
    pub returns: Vec<Option<f64>>,
    /// Compounded growth since the first defined return
    pub cumulative_return: Vec<Option<f64>>,
}

impl DerivedSeries {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.notional_traded.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.notional_traded.is_empty()
    }

    /// Row index of the largest notional traded value.
    pub fn peak_notional_index(&self) -> Result<usize, MetricsError> {
        argmax(&self.notional_traded)
    }

    /// Row index of the largest cumulative return.
    pub fn peak_cumulative_return_index(&self) -> Result<usize, MetricsError> {
        argmax_index(&self.cumulative_return)
    }
}

/// Derived-metrics pipeline over a validated price history.
///
/// Stateless: every run is a pure function of the input history and the
/// configured window, so repeated runs produce bit-identical output.
#[derive(Debug, Clone)]
pub struct MetricsPipeline {
    window: usize,
    min_periods: usize,
}

impl MetricsPipeline {
    /// Create a pipeline with the given moving-average window.
    ///
    /// `min_periods` defaults to 0: the moving average shrinks at the
    /// start of the series instead of warming up as `None`.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self {
            window,
            min_periods: 0,
        }
    }

    /// Set the minimum observation count for the moving average.
    pub fn with_min_periods(mut self, min_periods: usize) -> Self {
        self.min_periods = min_periods;
        self
    }

    /// Get the moving-average window.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Compute every derived column for the given history.
    pub fn run(&self, history: &PriceHistory) -> Result<DerivedSeries, MetricsError> {
        let closes = history.closes();

        let moving_average = RollingMean::new(self.window)
            .with_min_periods(self.min_periods)
            .calculate(&closes);
        let notional = notional_traded(&history.opens(), &history.volumes())?;
        let returns = SimpleReturns.calculate(&closes);
        let cumulative_return = CumulativeReturn.calculate(&returns);

        Ok(DerivedSeries {
            moving_average,
            notional_traded: notional,
            returns,
            cumulative_return,
        })
    }
}

impl Default for MetricsPipeline {
    fn default() -> Self {
        Self::new(100)
    }
}
