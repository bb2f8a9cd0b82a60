#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_possible_wrap)]
#![warn(clippy::cast_sign_loss)]
#![forbid(unsafe_code)]
#![deny(deprecated, clippy::todo, clippy::wildcard_imports, clippy::correctness)]
#![warn(clippy::missing_const_for_fn, clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # Oxiknn: k-nearest-neighbor classification over a KD-tree
//!
//! `oxiknn` indexes fixed-dimensional numeric samples in a balanced KD-tree and
//! answers exact or approximate k-nearest-neighbor queries with branch-and-bound
//! search. A classifier built on the index turns the retrieved neighbors into a
//! predicted label and a probability distribution over labels.
//!
//! ```
//! use oxiknn::{KdNeighbors, Labeled, Learner, Manhattan};
//!
//! let training = Labeled::from_continuous(
//!     vec![vec![0.0, 0.0], vec![0.5, 0.2], vec![9.0, 9.0], vec![9.5, 8.8]],
//!     vec!["near", "near", "far", "far"],
//! )?;
//!
//! let mut classifier = KdNeighbors::new(3, Box::new(Manhattan), true, 20)?;
//! classifier.train(&training)?;
//! assert_eq!(classifier.predict_sample(&[0.2, 0.1])?, "near");
//! # Ok::<(), oxiknn::OxiknnError>(())
//! ```

pub mod core;

// Re-export key types for easier use by library consumers
pub use crate::core::classifiers::KdNeighbors;
pub use crate::core::common::traits::{Estimator, Learner, Probabilistic};
pub use crate::core::common::OxiknnError;
pub use crate::core::config::{Config, ConfigBuilder};
pub use crate::core::dataset::{Dataset, Labeled, Unlabeled};
pub use crate::core::indexing::vector::kdtree::{KdTree, KdTreeError, Neighbor};
pub use crate::core::metrics::{Accuracy, Metric};
pub use crate::core::types::{DataType, EstimatorType, Feature, Label};
pub use crate::core::vector::distance::{
    Chebyshev, DistanceKernel, DistanceMetric, Euclidean, Manhattan, Minkowski,
};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, OxiknnError>;
