// src/core/dataset/unlabeled.rs

use super::{check_rectangular, Dataset};
use crate::core::common::OxiknnError;
use crate::core::types::Feature;

/// Feature rows without labels, e.g. the queries passed to `predict`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unlabeled {
    samples: Vec<Vec<Feature>>,
}

impl Unlabeled {
    /// Creates a dataset, checking every row has the same width.
    pub fn new(samples: Vec<Vec<Feature>>) -> Result<Self, OxiknnError> {
        check_rectangular(&samples)?;
        Ok(Self { samples })
    }

    /// Creates a dataset of continuous rows.
    pub fn from_continuous(samples: Vec<Vec<f64>>) -> Result<Self, OxiknnError> {
        Self::new(
            samples
                .into_iter()
                .map(|row| row.into_iter().map(Feature::Continuous).collect())
                .collect(),
        )
    }
}

impl Dataset for Unlabeled {
    fn samples(&self) -> &[Vec<Feature>] {
        &self.samples
    }
}
