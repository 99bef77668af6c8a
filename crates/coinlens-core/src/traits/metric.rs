//! Metric trait definition.

/// Trait for derived-series computations.
///
/// A metric maps an input column to an output column of the same length,
/// aligned index-for-index with the input. Entries that cannot be computed
/// (warmup, missing upstream value) are represented in the output type,
/// typically as `Option<f64>`, never as NaN sentinels.
pub trait Metric: Send + Sync {
    /// The per-row output type of the metric.
    type Output;

    /// Compute the derived column for the given input column.
    ///
    /// The result has exactly `data.len()` entries. Must be deterministic:
    /// the same input always produces bit-identical output.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the name of the metric.
    fn name(&self) -> &str;
}
