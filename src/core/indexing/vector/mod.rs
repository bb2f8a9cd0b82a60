// src/core/indexing/vector/mod.rs

//! Spatial indexes over dense feature vectors.

pub mod kdtree;

pub use self::kdtree::{KdTree, KdTreeError, Neighbor};
