// src/core/classifiers/mod.rs

pub mod kd_neighbors;

pub use self::kd_neighbors::KdNeighbors;
