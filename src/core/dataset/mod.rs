// src/core/dataset/mod.rs

//! In-memory datasets of feature rows, optionally paired with labels.

use crate::core::common::OxiknnError;
use crate::core::types::{DataType, Feature, Label};

pub mod generators;
mod labeled;
mod unlabeled;

pub use self::labeled::Labeled;
pub use self::unlabeled::Unlabeled;

/// Common read access to a dataset.
pub trait Dataset {
    /// The feature rows, one per sample.
    fn samples(&self) -> &[Vec<Feature>];

    /// The labels paired with each sample, if the dataset is labeled.
    fn labels(&self) -> Option<&[Label]> {
        None
    }

    fn num_samples(&self) -> usize {
        self.samples().len()
    }

    fn num_features(&self) -> usize {
        self.samples().first().map_or(0, Vec::len)
    }

    fn is_empty(&self) -> bool {
        self.samples().is_empty()
    }

    /// Data type of each column, read from the first row.
    fn column_types(&self) -> Vec<DataType> {
        self.samples()
            .first()
            .map(|row| row.iter().map(Feature::data_type).collect())
            .unwrap_or_default()
    }
}

/// Checks every row has the same number of features.
pub(crate) fn check_rectangular(samples: &[Vec<Feature>]) -> Result<(), OxiknnError> {
    let Some(first) = samples.first() else {
        return Ok(());
    };
    let width = first.len();
    if let Some((row, sample)) = samples.iter().enumerate().find(|(_, s)| s.len() != width) {
        return Err(OxiknnError::invalid_input(format!(
            "Sample {} has {} features, expected {}",
            row,
            sample.len(),
            width
        )));
    }
    Ok(())
}

/// Converts feature rows into a dense continuous matrix.
///
/// # Errors
///
/// Returns `OxiknnError::InvalidInput` naming the first non-continuous feature.
pub fn to_continuous(samples: &[Vec<Feature>]) -> Result<Vec<Vec<f64>>, OxiknnError> {
    samples
        .iter()
        .enumerate()
        .map(|(row, sample)| {
            sample
                .iter()
                .enumerate()
                .map(|(column, feature)| {
                    feature.as_continuous().ok_or_else(|| {
                        OxiknnError::invalid_input(format!(
                            "Feature {} of sample {} is {}, only continuous features are supported",
                            column,
                            row,
                            feature.data_type()
                        ))
                    })
                })
                .collect()
        })
        .collect()
}
