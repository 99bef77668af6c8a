//! Validate configuration command.

use anyhow::Result;
use coinlens_config::load_config;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("MA window: {}", config.analysis.window);
            println!("MA min periods: {}", config.analysis.min_periods);
            println!("Correlogram max lag: {}", config.analysis.max_lag);
            match (config.focus.start, config.focus.end) {
                (Some(start), Some(end)) => println!("Focus window: {} .. {}", start, end),
                (Some(start), None) => println!("Focus window: {} ..", start),
                (None, Some(end)) => println!("Focus window: .. {}", end),
                (None, None) => println!("Focus window: unset"),
            }
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
