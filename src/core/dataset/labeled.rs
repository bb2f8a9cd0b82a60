// src/core/dataset/labeled.rs

use super::{check_rectangular, Dataset};
use crate::core::common::OxiknnError;
use crate::core::types::{Feature, Label};

/// Feature rows paired one-to-one with class labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labeled {
    samples: Vec<Vec<Feature>>,
    labels: Vec<Label>,
}

impl Labeled {
    /// Creates a labeled dataset.
    ///
    /// # Errors
    ///
    /// Returns `OxiknnError::InvalidInput` if the label count differs from the
    /// sample count or the rows are not all the same width.
    pub fn new(samples: Vec<Vec<Feature>>, labels: Vec<Label>) -> Result<Self, OxiknnError> {
        if samples.len() != labels.len() {
            return Err(OxiknnError::invalid_input(format!(
                "Number of labels ({}) must equal number of samples ({})",
                labels.len(),
                samples.len()
            )));
        }
        check_rectangular(&samples)?;
        Ok(Self { samples, labels })
    }

    /// Creates a labeled dataset of continuous rows.
    pub fn from_continuous<L: Into<Label>>(
        samples: Vec<Vec<f64>>,
        labels: Vec<L>,
    ) -> Result<Self, OxiknnError> {
        Self::new(
            samples
                .into_iter()
                .map(|row| row.into_iter().map(Feature::Continuous).collect())
                .collect(),
            labels.into_iter().map(Into::into).collect(),
        )
    }

    /// Appends the samples of `other` to this dataset.
    pub fn merge(mut self, other: Self) -> Result<Self, OxiknnError> {
        if !self.is_empty() && !other.is_empty() && self.num_features() != other.num_features() {
            return Err(OxiknnError::invalid_input(format!(
                "Cannot merge datasets with {} and {} features",
                self.num_features(),
                other.num_features()
            )));
        }
        self.samples.extend(other.samples);
        self.labels.extend(other.labels);
        Ok(self)
    }

    /// Distinct labels in order of first appearance.
    pub fn possible_outcomes(&self) -> Vec<&Label> {
        let mut outcomes: Vec<&Label> = Vec::new();
        for label in &self.labels {
            if !outcomes.contains(&label) {
                outcomes.push(label);
            }
        }
        outcomes
    }
}

impl Dataset for Labeled {
    fn samples(&self) -> &[Vec<Feature>] {
        &self.samples
    }

    fn labels(&self) -> Option<&[Label]> {
        Some(&self.labels)
    }
}
