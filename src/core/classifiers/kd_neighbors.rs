// src/core/classifiers/kd_neighbors.rs

//! K-nearest-neighbor classifier backed by a KD-tree.

use std::collections::HashMap;

use log::info;

use crate::core::common::functions::argmax;
use crate::core::common::traits::{Estimator, Learner, Probabilistic};
use crate::core::common::OxiknnError;
use crate::core::config::Config;
use crate::core::dataset::{to_continuous, Dataset};
use crate::core::indexing::vector::kdtree::{KdTree, Neighbor};
use crate::core::types::{DataType, EstimatorType, Label};
use crate::core::vector::distance::DistanceKernel;

/// Feature types the classifier can index.
const COMPATIBILITY: [DataType; 1] = [DataType::Continuous];

/// A k-nearest-neighbor classifier.
///
/// Training builds a KD-tree over the samples and keeps their labels in the
/// tree's leaf store. A prediction is a vote among the `k` nearest training
/// samples, each contributing weight 1, or `1 / (1 + distance)` when
/// weighting is enabled. Vote ties go to the label met first in
/// nearest-first order.
#[derive(Debug)]
pub struct KdNeighbors {
    k: usize,
    kernel: Box<dyn DistanceKernel>,
    weighted: bool,
    neighborhood_buffer: f64,
    tree: KdTree,
}

impl KdNeighbors {
    /// Creates an untrained classifier.
    ///
    /// # Errors
    ///
    /// Returns `OxiknnError::InvalidInput` if `k` or `max_leaf_size` is 0.
    pub fn new(
        k: usize,
        kernel: Box<dyn DistanceKernel>,
        weighted: bool,
        max_leaf_size: usize,
    ) -> Result<Self, OxiknnError> {
        if k == 0 {
            return Err(OxiknnError::invalid_input("At least 1 neighbor is required to make a prediction"));
        }
        Ok(Self {
            k,
            kernel,
            weighted,
            neighborhood_buffer: 0.0,
            tree: KdTree::new(max_leaf_size)?,
        })
    }

    /// Creates an untrained classifier from a validated configuration.
    pub fn from_config(config: &Config) -> Result<Self, OxiknnError> {
        config.validate()?;
        Self::new(config.k, config.metric.kernel()?, config.weighted, config.max_leaf_size)?
            .with_neighborhood_buffer(config.neighborhood_buffer)
    }

    /// Switches queries to approximate search with the given pruning buffer.
    pub fn with_neighborhood_buffer(mut self, buffer: f64) -> Result<Self, OxiknnError> {
        if !(buffer.is_finite() && buffer >= 0.0) {
            return Err(OxiknnError::invalid_input(format!(
                "Neighborhood buffer must be a non-negative number, {} given",
                buffer
            )));
        }
        self.neighborhood_buffer = buffer;
        Ok(self)
    }

    pub const fn k(&self) -> usize {
        self.k
    }

    pub const fn weighted(&self) -> bool {
        self.weighted
    }

    pub fn kernel(&self) -> &dyn DistanceKernel {
        self.kernel.as_ref()
    }

    pub const fn neighborhood_buffer(&self) -> f64 {
        self.neighborhood_buffer
    }

    /// Height of the underlying tree, 0 when untrained.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub const fn tree(&self) -> &KdTree {
        &self.tree
    }

    /// Predicts the label of a single sample.
    pub fn predict_sample(&self, sample: &[f64]) -> Result<Label, OxiknnError> {
        let neighbors = self.neighbors(sample)?;
        argmax(self.votes(&neighbors))
    }

    /// Class probabilities for a single sample.
    ///
    /// Only labels present among the retrieved neighbors appear in the map.
    pub fn proba_sample(&self, sample: &[f64]) -> Result<HashMap<Label, f64>, OxiknnError> {
        let neighbors = self.neighbors(sample)?;
        let votes = self.votes(&neighbors);
        let total: f64 = votes.iter().map(|(_, weight)| weight).sum();
        Ok(votes.into_iter().map(|(label, weight)| (label, weight / total)).collect())
    }

    fn neighbors(&self, sample: &[f64]) -> Result<Vec<Neighbor<'_>>, OxiknnError> {
        self.ensure_trained()?;
        Ok(self
            .tree
            .query_approximate(sample, self.k, self.neighborhood_buffer, self.kernel.as_ref())?)
    }

    /// Vote weight per label, in order of first appearance.
    ///
    /// Neighbors so far away that every inverse-distance weight underflows
    /// to zero are counted uniformly instead.
    fn votes(&self, neighbors: &[Neighbor<'_>]) -> Vec<(Label, f64)> {
        let votes = tally(neighbors, self.weighted);
        if votes.iter().map(|(_, weight)| weight).sum::<f64>() > 0.0 {
            votes
        } else {
            tally(neighbors, false)
        }
    }

    fn ensure_trained(&self) -> Result<(), OxiknnError> {
        if self.tree.is_trained() {
            Ok(())
        } else {
            Err(OxiknnError::invalid_state("Estimator has not been trained"))
        }
    }

    /// Shared front half of `predict` and `proba`.
    fn queries(&self, dataset: &dyn Dataset) -> Result<Vec<Vec<f64>>, OxiknnError> {
        self.ensure_trained()?;
        let samples = to_continuous(dataset.samples())?;
        if let Some(sample) = samples.iter().find(|s| s.len() != self.tree.dimension()) {
            return Err(OxiknnError::invalid_input(format!(
                "Samples have {} features, the estimator was trained on {}",
                sample.len(),
                self.tree.dimension()
            )));
        }
        Ok(samples)
    }
}

/// Sums vote weights per label, in order of first appearance.
fn tally(neighbors: &[Neighbor<'_>], weighted: bool) -> Vec<(Label, f64)> {
    neighbors.iter().fold(Vec::new(), |mut votes: Vec<(Label, f64)>, neighbor| {
        let weight = if weighted { 1.0 / (1.0 + neighbor.distance) } else { 1.0 };
        match votes.iter_mut().find(|(label, _)| label == neighbor.label) {
            Some((_, total)) => *total += weight,
            None => votes.push((neighbor.label.clone(), weight)),
        }
        votes
    })
}

impl Estimator for KdNeighbors {
    fn kind(&self) -> EstimatorType {
        EstimatorType::Classifier
    }

    fn compatibility(&self) -> &'static [DataType] {
        &COMPATIBILITY
    }

    fn predict(&self, dataset: &dyn Dataset) -> Result<Vec<Label>, OxiknnError> {
        self.queries(dataset)?
            .iter()
            .map(|sample| self.predict_sample(sample))
            .collect()
    }
}

impl Learner for KdNeighbors {
    fn train(&mut self, dataset: &dyn Dataset) -> Result<(), OxiknnError> {
        let labels = dataset
            .labels()
            .ok_or_else(|| OxiknnError::invalid_input("Estimator requires a labeled training set"))?;
        if dataset.is_empty() {
            return Err(OxiknnError::invalid_input("Training set must contain at least one sample"));
        }
        let samples = to_continuous(dataset.samples())?;

        self.tree.build(samples, labels.to_vec())?;

        info!(
            "Trained k-NN classifier on {} samples (k = {}, kernel = {}, weighted = {}, tree height {})",
            self.tree.len(),
            self.k,
            self.kernel.name(),
            self.weighted,
            self.tree.height()
        );
        Ok(())
    }

    fn trained(&self) -> bool {
        self.tree.is_trained()
    }
}

impl Probabilistic for KdNeighbors {
    fn proba(&self, dataset: &dyn Dataset) -> Result<Vec<HashMap<Label, f64>>, OxiknnError> {
        self.queries(dataset)?
            .iter()
            .map(|sample| self.proba_sample(sample))
            .collect()
    }
}
