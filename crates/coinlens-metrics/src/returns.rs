//! Simple daily returns and compounded cumulative return.

use coinlens_core::traits::Metric;

/// Simple close-to-close returns: `close[i] / close[i-1] - 1`.
///
/// The first entry has no prior close and is `None`. A prior close of
/// zero also yields `None` rather than an error or an infinity, so that
/// downstream consumers can tell "no value" apart from a real 0% return.
#[derive(Debug, Clone, Default)]
pub struct SimpleReturns;

impl Metric for SimpleReturns {
    type Output = Option<f64>;

    fn calculate(&self, closes: &[f64]) -> Vec<Option<f64>> {
        let mut result = Vec::with_capacity(closes.len());

        for i in 0..closes.len() {
            if i == 0 || closes[i - 1] == 0.0 {
                result.push(None);
            } else {
                result.push(Some(closes[i] / closes[i - 1] - 1.0));
            }
        }

        result
    }

    fn name(&self) -> &str {
        "returns"
    }
}

/// Compounded growth since the first defined return.
///
/// `cumulative[1] = 1 + returns[1]`, and from there each entry multiplies
/// the previous one by `(1 + returns[i])`. The chain is strict: once an
/// undefined factor appears, every later entry is `None` as well, since a
/// product cannot skip a missing factor without changing its meaning.
#[derive(Debug, Clone, Default)]
pub struct CumulativeReturn;

impl CumulativeReturn {
    /// Compound the given return series.
    ///
    /// Output is aligned with the input; the entry at index 0 is always
    /// `None` because the first bar has no return.
    pub fn calculate(&self, returns: &[Option<f64>]) -> Vec<Option<f64>> {
        let mut result = Vec::with_capacity(returns.len());
        let mut acc: Option<f64> = None;

        for (i, ret) in returns.iter().enumerate() {
            acc = if i == 0 {
                None
            } else if i == 1 {
                ret.map(|r| 1.0 + r)
            } else {
                match (acc, ret) {
                    (Some(prev), Some(r)) => Some(prev * (1.0 + r)),
                    _ => None,
                }
            };
            result.push(acc);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_boundary() {
        let returns = SimpleReturns.calculate(&[100.0, 110.0, 99.0]);

        assert_eq!(returns.len(), 3);
        assert_eq!(returns[0], None);
        assert!((returns[1].unwrap() - 0.10).abs() < 1e-10);
        assert!((returns[2].unwrap() + 0.10).abs() < 1e-10);
    }

    #[test]
    fn test_returns_zero_prior_close_is_undefined() {
        let returns = SimpleReturns.calculate(&[100.0, 0.0, 50.0]);

        assert_eq!(returns[0], None);
        assert!((returns[1].unwrap() + 1.0).abs() < 1e-10); // -100%
        assert_eq!(returns[2], None);
    }

    #[test]
    fn test_returns_zero_move_is_defined() {
        let returns = SimpleReturns.calculate(&[100.0, 100.0]);
        assert_eq!(returns[1], Some(0.0));
    }

    #[test]
    fn test_returns_empty_input() {
        assert!(SimpleReturns.calculate(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_chain() {
        let cumulative = CumulativeReturn.calculate(&[None, Some(0.10), Some(-0.10)]);

        assert_eq!(cumulative[0], None);
        assert!((cumulative[1].unwrap() - 1.10).abs() < 1e-10);
        assert!((cumulative[2].unwrap() - 0.99).abs() < 1e-10);
    }

    #[test]
    fn test_cumulative_undefined_propagates_forward() {
        let cumulative = CumulativeReturn.calculate(&[None, Some(0.10), None, Some(0.50)]);

        assert!((cumulative[1].unwrap() - 1.10).abs() < 1e-10);
        assert_eq!(cumulative[2], None);
        // A later defined return cannot restart the broken product chain.
        assert_eq!(cumulative[3], None);
    }

    #[test]
    fn test_cumulative_undefined_second_return_poisons_chain() {
        let cumulative = CumulativeReturn.calculate(&[None, None, Some(0.10)]);

        assert_eq!(cumulative[1], None);
        assert_eq!(cumulative[2], None);
    }

    #[test]
    fn test_cumulative_single_entry() {
        let cumulative = CumulativeReturn.calculate(&[None]);
        assert_eq!(cumulative, vec![None]);
    }
}
