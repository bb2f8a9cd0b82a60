use std::collections::HashMap;

use crate::core::common::OxiknnError;
use crate::core::dataset::Dataset;
use crate::core::types::{DataType, EstimatorType, Label};

/// A model that makes predictions on a dataset.
pub trait Estimator {
    /// The kind of estimator this is.
    fn kind(&self) -> EstimatorType;

    /// The feature data types this estimator accepts.
    fn compatibility(&self) -> &'static [DataType];

    /// Predicts one label per sample, in input order.
    fn predict(&self, dataset: &dyn Dataset) -> Result<Vec<Label>, OxiknnError>;
}

/// An estimator that has to be trained before it can predict.
pub trait Learner: Estimator {
    /// Trains (or retrains) the estimator on a labeled dataset.
    fn train(&mut self, dataset: &dyn Dataset) -> Result<(), OxiknnError>;

    fn trained(&self) -> bool;
}

/// An estimator that can produce class probabilities.
pub trait Probabilistic: Estimator {
    /// Returns one label → probability map per sample, in input order.
    fn proba(&self, dataset: &dyn Dataset) -> Result<Vec<HashMap<Label, f64>>, OxiknnError>;
}
