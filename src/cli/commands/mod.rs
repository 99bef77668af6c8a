//! CLI command implementations.

pub mod analyze;
pub mod export;
pub mod validate;

use anyhow::Result;
use coinlens_config::AppConfig;
use std::path::Path;
use tracing::debug;

/// Load the config file if present, otherwise fall back to defaults.
///
/// Only `validate-config` insists on the file existing; the analysis
/// commands are expected to work out of the box with the built-in
/// defaults.
fn load_or_default(config_path: &Path) -> Result<AppConfig> {
    if config_path.exists() {
        Ok(coinlens_config::load_config(config_path)?)
    } else {
        debug!(path = %config_path.display(), "config file not found, using defaults");
        Ok(AppConfig::default())
    }
}
