// src/core/vector/distance.rs

//! Distance kernels used by the KD-tree search.
//!
//! Every kernel here is a metric whose value is never smaller than the
//! absolute difference along any single coordinate. The tree's pruning
//! rule depends on that bound.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::core::common::OxiknnError;

/// A pluggable dissimilarity between two equal-length vectors.
pub trait DistanceKernel: Debug + Send + Sync {
    /// Computes the distance between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `OxiknnError::InvalidInput` if the vectors differ in length.
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, OxiknnError>;

    /// Short name of the kernel.
    fn name(&self) -> &'static str;
}

fn check_lengths(a: &[f64], b: &[f64]) -> Result<(), OxiknnError> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(OxiknnError::invalid_input(format!(
            "Vector dimension mismatch: dim1 = {}, dim2 = {}",
            a.len(),
            b.len()
        )))
    }
}

/// Computes an Lp-style norm of `a - b` with every difference divided by the
/// largest one first, so raising to a power cannot overflow on finite input.
fn scaled_norm(
    a: &[f64],
    b: &[f64],
    root: impl Fn(f64) -> f64,
    power: impl Fn(f64) -> f64,
) -> f64 {
    let largest = a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max);
    if largest == 0.0 || largest.is_infinite() {
        return largest;
    }
    let sum: f64 = a.iter().zip(b).map(|(x, y)| power((x - y).abs() / largest)).sum();
    largest * root(sum)
}

/// Sum of absolute differences (L1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl DistanceKernel for Manhattan {
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, OxiknnError> {
        check_lengths(a, b)?;
        Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// Root of the sum of squared differences (L2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceKernel for Euclidean {
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, OxiknnError> {
        check_lengths(a, b)?;
        Ok(scaled_norm(a, b, |sum| sum.sqrt(), |r| r * r))
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Largest absolute coordinate difference (L-infinity).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl DistanceKernel for Chebyshev {
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, OxiknnError> {
        check_lengths(a, b)?;
        Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max))
    }

    fn name(&self) -> &'static str {
        "chebyshev"
    }
}

/// Generalized Lp distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minkowski {
    p: f64,
}

impl Minkowski {
    /// Creates a Minkowski kernel. `p` below 1 does not give a metric and is rejected.
    pub fn new(p: f64) -> Result<Self, OxiknnError> {
        if !(p.is_finite() && p >= 1.0) {
            return Err(OxiknnError::invalid_input(format!(
                "Minkowski p must be a finite number >= 1, {} given",
                p
            )));
        }
        Ok(Self { p })
    }
}

impl DistanceKernel for Minkowski {
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, OxiknnError> {
        check_lengths(a, b)?;
        let p = self.p;
        Ok(scaled_norm(a, b, |sum| sum.powf(p.recip()), |r| r.powf(p)))
    }

    fn name(&self) -> &'static str {
        "minkowski"
    }
}

/// Serializable selector for the built-in kernels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    Manhattan,
    #[default]
    Euclidean,
    Chebyshev,
    Minkowski { p: f64 },
}

impl DistanceMetric {
    /// Instantiates the kernel this metric names.
    pub fn kernel(&self) -> Result<Box<dyn DistanceKernel>, OxiknnError> {
        Ok(match self {
            Self::Manhattan => Box::new(Manhattan),
            Self::Euclidean => Box::new(Euclidean),
            Self::Chebyshev => Box::new(Chebyshev),
            Self::Minkowski { p } => Box::new(Minkowski::new(*p)?),
        })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Chebyshev => "chebyshev",
            Self::Minkowski { .. } => "minkowski",
        }
    }
}
