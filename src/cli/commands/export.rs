//! Export command implementation.

use anyhow::{Context, Result};
use coinlens_metrics::MetricsPipeline;
use coinlens_report::{focus_to_csv, table_to_csv};
use std::path::Path;
use tracing::info;

use crate::cli::ExportArgs;

pub fn run(args: ExportArgs, config_path: &Path) -> Result<()> {
    let config = super::load_or_default(config_path)?;
    let window = args.window.unwrap_or(config.analysis.window);
    let focus_start = args.focus_start.or(config.focus.start);
    let focus_end = args.focus_end.or(config.focus.end);

    let data_path = args
        .data
        .to_str()
        .context("data path is not valid UTF-8")?;
    let history = coinlens_data::load_csv(data_path, &args.symbol)
        .with_context(|| format!("Failed to load '{}'", args.data.display()))?;

    let pipeline = MetricsPipeline::new(window).with_min_periods(config.analysis.min_periods);
    let derived = pipeline.run(&history)?;

    let table = table_to_csv(&history, &derived)?;
    std::fs::write(&args.out, table)?;
    info!("Augmented table written to {:?}", args.out);

    if let Some(focus_path) = &args.focus_out {
        let slice = history.between(focus_start, focus_end);
        std::fs::write(focus_path, focus_to_csv(&slice))?;
        info!(
            "Focus slice ({} bars) written to {:?}",
            slice.len(),
            focus_path
        );
    }

    Ok(())
}
