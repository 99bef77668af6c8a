//! Report generation for the analysis toolkit.
//!
//! Assembles the computed columns into a human-readable summary, a JSON
//! document, and the CSV tables consumed by the charting collaborator.

mod report;
mod table;

pub use report::{AnalysisReport, PeakRow};
pub use table::{focus_to_csv, table_to_csv};
