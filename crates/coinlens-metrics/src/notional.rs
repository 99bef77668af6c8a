//! Notional traded value.

use coinlens_core::error::MetricsError;

/// Elementwise `open * volume`, a proxy for value transacted per day.
///
/// The two columns must be the same length; a mismatch means the caller
/// assembled misaligned inputs and is reported as such rather than
/// silently truncating to the shorter column.
pub fn notional_traded(opens: &[f64], volumes: &[f64]) -> Result<Vec<f64>, MetricsError> {
    if opens.len() != volumes.len() {
        return Err(MetricsError::ShapeMismatch {
            left: opens.len(),
            right: volumes.len(),
        });
    }

    Ok(opens.iter().zip(volumes).map(|(o, v)| o * v).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notional_traded() {
        let result = notional_traded(&[2.0, 3.0], &[5.0, 0.0]).unwrap();
        assert_eq!(result, vec![10.0, 0.0]);
    }

    #[test]
    fn test_notional_traded_empty() {
        assert!(notional_traded(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_notional_traded_shape_mismatch() {
        let err = notional_traded(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::ShapeMismatch { left: 3, right: 2 }
        ));
    }
}
