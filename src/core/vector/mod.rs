// src/core/vector/mod.rs

//! Vector distance kernels used by the spatial index.

pub mod distance;

pub use distance::{Chebyshev, DistanceKernel, DistanceMetric, Euclidean, Manhattan, Minkowski};
