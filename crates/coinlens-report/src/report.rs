//! Analysis report assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use coinlens_core::error::MetricsError;
use coinlens_core::types::{DailyBar, PriceHistory};
use coinlens_metrics::{autocorrelation, partial_autocorrelation, DerivedSeries, SeriesSummary};

/// Full row at a peak index: the bar plus every derived value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakRow {
    pub index: usize,
    pub date: NaiveDate,
    pub bar: DailyBar,
    pub moving_average: Option<f64>,
    pub notional_traded: f64,
    pub daily_return: Option<f64>,
    pub cumulative_return: Option<f64>,
}

impl PeakRow {
    fn at(history: &PriceHistory, derived: &DerivedSeries, index: usize) -> Self {
        let bar = history.bars()[index];
        Self {
            index,
            date: bar.date,
            bar,
            moving_average: derived.moving_average[index],
            notional_traded: derived.notional_traded[index],
            daily_return: derived.returns[index],
            cumulative_return: derived.cumulative_return[index],
        }
    }
}

/// Complete analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Symbol the history was loaded for
    pub symbol: String,
    /// Number of bars analyzed
    pub bars: usize,
    /// First date in the history
    pub first_date: NaiveDate,
    /// Last date in the history
    pub last_date: NaiveDate,
    /// Moving-average window used
    pub window: usize,
    /// Close price summary
    pub close_summary: SeriesSummary,
    /// Daily returns summary (None for a single-bar history)
    pub returns_summary: Option<SeriesSummary>,
    /// Day with the largest notional traded value
    pub peak_notional: PeakRow,
    /// Day with the largest cumulative return
    pub peak_cumulative_return: PeakRow,
    /// Correlogram of the returns column; empty when fewer than two
    /// returns are defined
    pub returns_acf: Vec<f64>,
    /// Partial correlogram of the returns column, same convention
    pub returns_pacf: Vec<f64>,
    /// Focus window bounds echoed for the candlestick renderer
    pub focus_start: Option<NaiveDate>,
    pub focus_end: Option<NaiveDate>,
}

impl AnalysisReport {
    /// Assemble a report from a history and its derived columns.
    pub fn build(
        history: &PriceHistory,
        derived: &DerivedSeries,
        window: usize,
        max_lag: usize,
        focus_start: Option<NaiveDate>,
        focus_end: Option<NaiveDate>,
    ) -> Result<Self, MetricsError> {
        if history.len() != derived.len() {
            return Err(MetricsError::ShapeMismatch {
                left: history.len(),
                right: derived.len(),
            });
        }
        let (Some(first), Some(last)) = (history.first(), history.last()) else {
            return Err(MetricsError::EmptySeries);
        };

        let close_summary =
            SeriesSummary::describe_slice(&history.closes()).ok_or(MetricsError::EmptySeries)?;
        let returns_summary = SeriesSummary::describe(&derived.returns);

        let peak_notional = PeakRow::at(history, derived, derived.peak_notional_index()?);
        let peak_cumulative_return =
            PeakRow::at(history, derived, derived.peak_cumulative_return_index()?);

        let returns_acf = autocorrelation(&derived.returns, max_lag).unwrap_or_default();
        let returns_pacf = partial_autocorrelation(&derived.returns, max_lag).unwrap_or_default();

        Ok(Self {
            symbol: history.symbol.clone(),
            bars: history.len(),
            first_date: first.date,
            last_date: last.date,
            window,
            close_summary,
            returns_summary,
            peak_notional,
            peak_cumulative_return,
            returns_acf,
            returns_pacf,
            focus_start,
            focus_end,
        })
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                     ANALYSIS REPORT                        \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("INPUT\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Symbol:              {}\n", self.symbol));
        s.push_str(&format!("  Bars:                {}\n", self.bars));
        s.push_str(&format!(
            "  Date Range:          {} .. {}\n",
            self.first_date, self.last_date
        ));
        s.push_str(&format!("  MA Window:           {}\n", self.window));
        s.push('\n');

        s.push_str("CLOSE PRICES\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Mean:                {:.4}\n", self.close_summary.mean));
        s.push_str(&format!("  Std Dev:             {:.4}\n", self.close_summary.std));
        s.push_str(&format!("  Min:                 {:.4}\n", self.close_summary.min));
        s.push_str(&format!("  Median:              {:.4}\n", self.close_summary.median));
        s.push_str(&format!("  Max:                 {:.4}\n", self.close_summary.max));
        s.push('\n');

        if let Some(returns) = &self.returns_summary {
            s.push_str("DAILY RETURNS\n");
            s.push_str("───────────────────────────────────────────────────────────\n");
            s.push_str(&format!("  Observations:        {}\n", returns.count));
            s.push_str(&format!("  Mean:                {:.6}\n", returns.mean));
            s.push_str(&format!("  Std Dev:             {:.6}\n", returns.std));
            s.push_str(&format!("  Min:                 {:.6}\n", returns.min));
            s.push_str(&format!("  Max:                 {:.6}\n", returns.max));
            s.push('\n');
        }

        s.push_str("PEAK DAYS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Max Notional Traded: {} ({:.2})\n",
            self.peak_notional.date, self.peak_notional.notional_traded
        ));
        match self.peak_cumulative_return.cumulative_return {
            Some(value) => s.push_str(&format!(
                "  Max Cum. Return:     {} ({:.4}x)\n",
                self.peak_cumulative_return.date, value
            )),
            None => s.push_str(&format!(
                "  Max Cum. Return:     {}\n",
                self.peak_cumulative_return.date
            )),
        }
        s.push('\n');

        if let (Some(start), Some(end)) = (self.focus_start, self.focus_end) {
            s.push_str("FOCUS WINDOW\n");
            s.push_str("───────────────────────────────────────────────────────────\n");
            s.push_str(&format!("  Candlestick Range:   {} .. {}\n", start, end));
            s.push('\n');
        }

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
