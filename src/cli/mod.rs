//! CLI definitions.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coinlens")]
#[command(author, version, about = "Historical price-series analysis for cryptocurrency assets")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a price history and print the report
    Analyze(AnalyzeArgs),
    /// Export the augmented table for chart rendering
    Export(ExportArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Input CSV file
    #[arg(short, long)]
    pub data: PathBuf,

    /// Symbol label for the report
    #[arg(short, long, default_value = "ETH-USD")]
    pub symbol: String,

    /// Moving-average window, overrides the configured value
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Minimum observations for the moving average, overrides config
    #[arg(long)]
    pub min_periods: Option<usize>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save the JSON report to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ExportArgs {
    /// Input CSV file
    #[arg(short, long)]
    pub data: PathBuf,

    /// Symbol label for the export
    #[arg(short, long, default_value = "ETH-USD")]
    pub symbol: String,

    /// Output path for the augmented table
    #[arg(short, long)]
    pub out: PathBuf,

    /// Also write the focus-window OHLC slice here
    #[arg(long)]
    pub focus_out: Option<PathBuf>,

    /// Focus window start (exclusive, YYYY-MM-DD), overrides config
    #[arg(long)]
    pub focus_start: Option<NaiveDate>,

    /// Focus window end (inclusive, YYYY-MM-DD), overrides config
    #[arg(long)]
    pub focus_end: Option<NaiveDate>,

    /// Moving-average window, overrides the configured value
    #[arg(short, long)]
    pub window: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "coinlens", "analyze", "--data", "ETH-USD.csv", "--window", "50",
        ]);
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.data, PathBuf::from("ETH-USD.csv"));
                assert_eq!(args.window, Some(50));
                assert_eq!(args.output, "text");
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_parse_export_focus_dates() {
        let cli = Cli::parse_from([
            "coinlens",
            "export",
            "--data",
            "ETH-USD.csv",
            "--out",
            "table.csv",
            "--focus-start",
            "2021-04-01",
            "--focus-end",
            "2021-07-26",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.focus_start, Some("2021-04-01".parse().unwrap()));
                assert_eq!(args.focus_end, Some("2021-07-26".parse().unwrap()));
            }
            _ => panic!("expected export command"),
        }
    }
}
