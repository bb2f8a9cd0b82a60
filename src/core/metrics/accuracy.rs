// src/core/metrics/accuracy.rs

use super::Metric;
use crate::core::common::OxiknnError;
use crate::core::types::Label;

/// Fraction of predictions equal to the true label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accuracy;

impl Metric for Accuracy {
    fn score(&self, predictions: &[Label], labels: &[Label]) -> Result<f64, OxiknnError> {
        if predictions.len() != labels.len() {
            return Err(OxiknnError::invalid_input(format!(
                "Number of predictions ({}) must equal number of labels ({})",
                predictions.len(),
                labels.len()
            )));
        }
        if predictions.is_empty() {
            return Err(OxiknnError::invalid_input("Cannot score an empty set of predictions"));
        }

        let correct = predictions.iter().zip(labels).filter(|(p, l)| p == l).count();
        Ok(correct as f64 / predictions.len() as f64)
    }

    fn name(&self) -> &str {
        "accuracy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn labels(values: &[&str]) -> Vec<Label> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_accuracy_score() {
        let predictions = labels(&["lamb", "lamb", "pig", "sheep"]);
        let truth = labels(&["lamb", "pig", "pig", "sheep"]);
        assert_relative_eq!(Accuracy.score(&predictions, &truth).unwrap(), 0.75);
        assert_relative_eq!(Accuracy.score(&truth, &truth).unwrap(), 1.0);
    }

    #[test]
    fn test_accuracy_rejects_mismatched_lengths() {
        let err = Accuracy.score(&labels(&["a"]), &labels(&["a", "b"])).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(Accuracy.score(&[], &[]).is_err());
    }

    #[test]
    fn test_accuracy_metadata() {
        assert_eq!(Accuracy.name(), "accuracy");
        assert!(Accuracy.higher_is_better());
    }
}
