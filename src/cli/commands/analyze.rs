//! Analyze command implementation.

use anyhow::{Context, Result};
use coinlens_metrics::MetricsPipeline;
use coinlens_report::AnalysisReport;
use std::path::Path;
use tracing::info;

use crate::cli::AnalyzeArgs;

pub fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    let config = super::load_or_default(config_path)?;
    let window = args.window.unwrap_or(config.analysis.window);
    let min_periods = args.min_periods.unwrap_or(config.analysis.min_periods);

    info!("Analyzing {} from {:?}", args.symbol, args.data);

    let data_path = args
        .data
        .to_str()
        .context("data path is not valid UTF-8")?;
    let history = coinlens_data::load_csv(data_path, &args.symbol)
        .with_context(|| format!("Failed to load '{}'", args.data.display()))?;

    let pipeline = MetricsPipeline::new(window).with_min_periods(min_periods);
    let derived = pipeline.run(&history)?;
    let report = AnalysisReport::build(
        &history,
        &derived,
        window,
        config.analysis.max_lag,
        config.focus.start,
        config.focus.end,
    )
    .context("Failed to build report")?;

    // Output results
    match args.output.as_str() {
        "json" => {
            println!("{}", report.to_json()?);
        }
        _ => {
            println!("{}", report.summary());
        }
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        std::fs::write(save_path, report.to_json()?)?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}
