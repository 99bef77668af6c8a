//! Trailing moving average.

use coinlens_core::traits::Metric;

/// Trailing arithmetic mean over the last `window` observations.
///
/// Unlike a fixed-width moving average, the window shrinks at the start
/// of the sequence: index `i` averages `data[max(0, i-window+1)..=i]`.
/// `min_periods` sets how many observations must be available before a
/// value is produced; below that threshold the entry is `None`.
#[derive(Debug, Clone)]
pub struct RollingMean {
    window: usize,
    min_periods: usize,
}

impl RollingMean {
    /// Create a rolling mean requiring a full window, like a plain SMA.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self {
            window,
            min_periods: window,
        }
    }

    /// Set the minimum observation count.
    ///
    /// A mean needs at least one observation, so `min_periods` of 0 and 1
    /// are equivalent: every index produces a value.
    pub fn with_min_periods(mut self, min_periods: usize) -> Self {
        self.min_periods = min_periods;
        self
    }

    /// Get the window length.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Metric for RollingMean {
    type Output = Option<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let min_obs = self.min_periods.max(1);
        let mut result = Vec::with_capacity(data.len());
        let mut sum = 0.0;

        // Sliding sum, strictly sequential so the reduction order (and
        // therefore the rounding) is identical on every run.
        for i in 0..data.len() {
            sum += data[i];
            if i >= self.window {
                sum -= data[i - self.window];
            }
            let count = (i + 1).min(self.window);
            if count >= min_obs {
                result.push(Some(sum / count as f64));
            } else {
                result.push(None);
            }
        }

        result
    }

    fn name(&self) -> &str {
        "rolling_mean"
    }
}
