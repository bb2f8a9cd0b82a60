// src/core/dataset/generators.rs

//! Synthetic dataset generators.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use super::{Labeled, Unlabeled};
use crate::core::common::OxiknnError;
use crate::core::types::Label;

/// Seed used when the caller does not provide one.
const DEFAULT_SEED: u64 = 0x6b6e_6e5f_626c_6f62;

/// An isotropic gaussian cloud of points around a center.
#[derive(Debug, Clone)]
pub struct Blob {
    center: Vec<f64>,
    noise: Normal<f64>,
}

impl Blob {
    pub fn new(center: Vec<f64>, stddev: f64) -> Result<Self, OxiknnError> {
        if center.is_empty() {
            return Err(OxiknnError::invalid_input("Blob center must have at least one dimension"));
        }
        if !(stddev.is_finite() && stddev >= 0.0) {
            return Err(OxiknnError::invalid_input(format!(
                "Blob standard deviation must be a non-negative number, {} given",
                stddev
            )));
        }
        let noise = Normal::new(0.0, stddev)
            .map_err(|e| OxiknnError::invalid_input(format!("Invalid blob deviation: {}", e)))?;
        Ok(Self { center, noise })
    }

    pub fn dimensions(&self) -> usize {
        self.center.len()
    }

    /// Draws `n` points using `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Vec<f64>> {
        (0..n)
            .map(|_| {
                self.center
                    .iter()
                    .map(|c| c + self.noise.sample(rng))
                    .collect()
            })
            .collect()
    }

    /// Generates an unlabeled dataset of `n` points from a fixed seed.
    pub fn generate(&self, n: usize) -> Result<Unlabeled, OxiknnError> {
        self.generate_with_seed(n, DEFAULT_SEED)
    }

    pub fn generate_with_seed(&self, n: usize, seed: u64) -> Result<Unlabeled, OxiknnError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Unlabeled::from_continuous(self.sample(n, &mut rng))
    }
}

/// A labeled mixture of blobs, each contributing samples in proportion to its weight.
#[derive(Debug, Clone)]
pub struct Agglomerate {
    generators: Vec<(Label, Blob)>,
    weights: Vec<f64>,
}

impl Agglomerate {
    pub fn new<L: Into<Label>>(
        generators: Vec<(L, Blob)>,
        weights: Vec<f64>,
    ) -> Result<Self, OxiknnError> {
        if generators.is_empty() {
            return Err(OxiknnError::invalid_input("Agglomerate requires at least one generator"));
        }
        if generators.len() != weights.len() {
            return Err(OxiknnError::invalid_input(format!(
                "Number of weights ({}) must equal number of generators ({})",
                weights.len(),
                generators.len()
            )));
        }
        if weights.iter().any(|w| !(w.is_finite() && *w > 0.0)) {
            return Err(OxiknnError::invalid_input("Generator weights must be positive"));
        }
        let dimensions = generators[0].1.dimensions();
        if generators.iter().any(|(_, blob)| blob.dimensions() != dimensions) {
            return Err(OxiknnError::invalid_input(
                "All generators must have the same dimensionality",
            ));
        }

        let total: f64 = weights.iter().sum();
        Ok(Self {
            generators: generators.into_iter().map(|(label, blob)| (label.into(), blob)).collect(),
            weights: weights.iter().map(|w| w / total).collect(),
        })
    }

    pub fn dimensions(&self) -> usize {
        self.generators.first().map_or(0, |(_, blob)| blob.dimensions())
    }

    /// Generates a labeled dataset of `n` points from a fixed seed.
    pub fn generate(&self, n: usize) -> Result<Labeled, OxiknnError> {
        self.generate_with_seed(n, DEFAULT_SEED)
    }

    pub fn generate_with_seed(&self, n: usize, seed: u64) -> Result<Labeled, OxiknnError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(n);
        let mut labels = Vec::with_capacity(n);

        for _ in 0..n {
            let (label, blob) = self.pick(&mut rng);
            samples.extend(blob.sample(1, &mut rng));
            labels.push(label.clone());
        }

        Labeled::from_continuous(samples, labels)
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &(Label, Blob) {
        let mut draw: f64 = rng.gen();
        for (generator, weight) in self.generators.iter().zip(&self.weights) {
            if draw < *weight {
                return generator;
            }
            draw -= weight;
        }
        // Rounding can leave a sliver past the last cumulative weight.
        &self.generators[self.generators.len() - 1]
    }
}
