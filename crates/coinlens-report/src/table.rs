//! CSV tables for the charting collaborator.

use coinlens_core::error::MetricsError;
use coinlens_core::types::{DailyBar, PriceHistory};
use coinlens_metrics::DerivedSeries;

/// Export the augmented table.
///
/// Column names are the legacy ones downstream chart scripts key on; in
/// particular the moving-average column stays `100ma` whatever window was
/// configured. Undefined entries serialize as empty fields.
pub fn table_to_csv(
    history: &PriceHistory,
    derived: &DerivedSeries,
) -> Result<String, MetricsError> {
    if history.len() != derived.len() {
        return Err(MetricsError::ShapeMismatch {
            left: history.len(),
            right: derived.len(),
        });
    }

    let mut csv =
        String::from("Date,Open,High,Low,Close,Volume,100ma,Total Traded,returns,Cumulative Return\n");
    for (i, bar) in history.iter().enumerate() {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            bar.date,
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume,
            optional(derived.moving_average[i]),
            derived.notional_traded[i],
            optional(derived.returns[i]),
            optional(derived.cumulative_return[i]),
        ));
    }

    Ok(csv)
}

/// Export an OHLC sub-range for candlestick rendering.
pub fn focus_to_csv(bars: &[DailyBar]) -> String {
    let mut csv = String::from("Date,Open,High,Low,Close\n");
    for bar in bars {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            bar.date, bar.open, bar.high, bar.low, bar.close
        ));
    }
    csv
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
