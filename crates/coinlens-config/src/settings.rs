//! Configuration structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub focus: FocusSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "coinlens".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Derived-metrics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Moving-average window in bars
    pub window: usize,
    /// Minimum observations before the moving average produces a value
    pub min_periods: usize,
    /// Largest lag for the returns correlogram
    pub max_lag: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            window: 100,
            min_periods: 0,
            max_lag: 35,
        }
    }
}

/// Date window handed to the candlestick renderer.
///
/// The slice is exclusive of `start` and inclusive of `end`; either side
/// may be left open.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FocusSettings {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}
