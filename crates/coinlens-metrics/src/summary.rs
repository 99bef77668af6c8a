//! Descriptive statistics for a series.

use serde::{Deserialize, Serialize};

/// Count, mean, spread, and quartiles of the defined entries of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Number of defined entries
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator; 0 for a single entry)
    pub std: f64,
    /// Minimum
    pub min: f64,
    /// 25th percentile
    pub p25: f64,
    /// Median
    pub median: f64,
    /// 75th percentile
    pub p75: f64,
    /// Maximum
    pub max: f64,
}

impl SeriesSummary {
    /// Summarize the defined entries of a series.
    ///
    /// `None` entries and NaNs are excluded from every statistic, so the
    /// summary of a returns column describes only the days that have a
    /// return. Returns `None` when nothing is defined.
    pub fn describe(values: &[Option<f64>]) -> Option<Self> {
        let defined: Vec<f64> = values
            .iter()
            .filter_map(|v| *v)
            .filter(|v| !v.is_nan())
            .collect();
        Self::from_defined(defined)
    }

    /// Summarize a dense series. NaN entries count as undefined.
    pub fn describe_slice(values: &[f64]) -> Option<Self> {
        let defined: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        Self::from_defined(defined)
    }

    fn from_defined(mut defined: Vec<f64>) -> Option<Self> {
        if defined.is_empty() {
            return None;
        }

        let count = defined.len();
        let mean = defined.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance = defined.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (count - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        // NaNs are already filtered, total order is safe here.
        defined.sort_by(|a, b| a.partial_cmp(b).unwrap());

        Some(Self {
            count,
            mean,
            std,
            min: defined[0],
            p25: percentile(&defined, 0.25),
            median: percentile(&defined, 0.50),
            p75: percentile(&defined, 0.75),
            max: defined[count - 1],
        })
    }
}

/// Percentile with linear interpolation between closest ranks.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
