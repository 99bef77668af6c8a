//! Autocorrelation of a series.

use coinlens_core::error::MetricsError;

/// Sample autocorrelation of the defined entries, lags `0..=max_lag`.
///
/// Undefined entries are dropped before computing, the same way a returns
/// column is de-gapped before its correlogram. Lag 0 is always 1. The lag
/// count is clamped to `n - 1`. Fails with `EmptySeries` when fewer than
/// two defined values remain; a zero-variance series yields zeros beyond
/// lag 0.
pub fn autocorrelation(
    values: &[Option<f64>],
    max_lag: usize,
) -> Result<Vec<f64>, MetricsError> {
    let data: Vec<f64> = values
        .iter()
        .filter_map(|v| *v)
        .filter(|v| !v.is_nan())
        .collect();
    let n = data.len();
    if n < 2 {
        return Err(MetricsError::EmptySeries);
    }

    let max_lag = max_lag.min(n - 1);
    let mean = data.iter().sum::<f64>() / n as f64;
    let denom: f64 = data.iter().map(|v| (v - mean).powi(2)).sum();

    let mut acf = Vec::with_capacity(max_lag + 1);
    acf.push(1.0);
    for lag in 1..=max_lag {
        if denom == 0.0 {
            acf.push(0.0);
            continue;
        }
        let num: f64 = (lag..n)
            .map(|t| (data[t] - mean) * (data[t - lag] - mean))
            .sum();
        acf.push(num / denom);
    }

    Ok(acf)
}

/// Partial autocorrelation via the Durbin-Levinson recursion on the ACF.
///
/// Same input conventions as [`autocorrelation`]. Entry `k` is the
/// correlation between the series and itself at lag `k` after removing
/// the influence of the intermediate lags.
pub fn partial_autocorrelation(
    values: &[Option<f64>],
    max_lag: usize,
) -> Result<Vec<f64>, MetricsError> {
    let acf = autocorrelation(values, max_lag)?;
    let max_lag = acf.len() - 1;

    let mut pacf = Vec::with_capacity(max_lag + 1);
    pacf.push(1.0);
    if max_lag == 0 {
        return Ok(pacf);
    }

    // phi[j] holds the order-k AR coefficients, updated in place per level.
    let mut phi = vec![0.0; max_lag + 1];
    phi[1] = acf[1];
    pacf.push(acf[1]);

    for k in 2..=max_lag {
        let num = acf[k] - (1..k).map(|j| phi[j] * acf[k - j]).sum::<f64>();
        let den = 1.0 - (1..k).map(|j| phi[j] * acf[j]).sum::<f64>();
        let phi_kk = if den.abs() < f64::EPSILON { 0.0 } else { num / den };

        let prev = phi.clone();
        for j in 1..k {
            phi[j] = prev[j] - phi_kk * prev[k - j];
        }
        phi[k] = phi_kk;
        pacf.push(phi_kk);
    }

    Ok(pacf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defined(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().map(|v| Some(*v)).collect()
    }

    #[test]
    fn test_acf_lag_zero_is_one() {
        let acf = autocorrelation(&defined(&[1.0, 2.0, 3.0, 4.0]), 2).unwrap();
        assert!((acf[0] - 1.0).abs() < 1e-10);
        assert_eq!(acf.len(), 3);
    }

    #[test]
    fn test_acf_alternating_series_is_negative_at_lag_one() {
        let data: Vec<f64> = (0..64).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let acf = autocorrelation(&defined(&data), 2).unwrap();

        assert!(acf[1] < -0.9);
        assert!(acf[2] > 0.9);
    }

    #[test]
    fn test_acf_drops_undefined_entries() {
        let values = vec![None, Some(1.0), Some(2.0), None, Some(3.0)];
        let acf = autocorrelation(&values, 1).unwrap();
        // Identical to the de-gapped series [1, 2, 3].
        let dense = autocorrelation(&defined(&[1.0, 2.0, 3.0]), 1).unwrap();
        assert_eq!(acf, dense);
    }

    #[test]
    fn test_acf_clamps_lag() {
        let acf = autocorrelation(&defined(&[1.0, 2.0, 3.0]), 50).unwrap();
        assert_eq!(acf.len(), 3); // lags 0..=2
    }

    #[test]
    fn test_acf_too_few_values() {
        assert!(matches!(
            autocorrelation(&[Some(1.0)], 5),
            Err(MetricsError::EmptySeries)
        ));
        assert!(matches!(
            autocorrelation(&[None, None], 5),
            Err(MetricsError::EmptySeries)
        ));
    }

    #[test]
    fn test_acf_zero_variance() {
        let acf = autocorrelation(&defined(&[5.0, 5.0, 5.0]), 2).unwrap();
        assert_eq!(acf, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pacf_lag_one_equals_acf() {
        let data: Vec<f64> = (0..32).map(|i| (i as f64 * 0.9).sin()).collect();
        let acf = autocorrelation(&defined(&data), 5).unwrap();
        let pacf = partial_autocorrelation(&defined(&data), 5).unwrap();

        assert_eq!(pacf.len(), 6);
        assert!((pacf[0] - 1.0).abs() < 1e-10);
        assert!((pacf[1] - acf[1]).abs() < 1e-10);
    }

    #[test]
    fn test_pacf_ar1_cuts_off_after_lag_one() {
        // AR(1) with coefficient 0.8 and a deterministic pseudo-noise term.
        let mut data = vec![0.5];
        for i in 1..256 {
            let noise = ((i as f64 * 12.9898).sin() * 43758.5453).fract() - 0.5;
            let next = 0.8 * data[i - 1] + noise;
            data.push(next);
        }
        let pacf = partial_autocorrelation(&defined(&data), 4).unwrap();

        assert!(pacf[1] > 0.5);
        assert!(pacf[2].abs() < 0.25);
        assert!(pacf[3].abs() < 0.25);
    }
}
