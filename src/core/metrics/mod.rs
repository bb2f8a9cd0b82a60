// src/core/metrics/mod.rs

//! Scoring of predictions against known labels.

pub mod accuracy;

pub use self::accuracy::Accuracy;

use crate::core::common::OxiknnError;
use crate::core::types::Label;

/// A score computed from predicted and true labels.
pub trait Metric {
    /// Scores `predictions` against `labels`, which must have the same length.
    fn score(&self, predictions: &[Label], labels: &[Label]) -> Result<f64, OxiknnError>;

    /// Name of the metric
    fn name(&self) -> &str;

    /// Whether higher values are better (true) or lower (false)
    fn higher_is_better(&self) -> bool {
        true
    }
}
