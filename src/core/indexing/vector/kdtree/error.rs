// src/core/indexing/vector/kdtree/error.rs

use std::fmt;

/// Custom error types for KD-Tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KdTreeError {
    /// Error when trying to build a tree from empty input.
    EmptyInput(String),
    /// Error when vector dimensions are inconsistent.
    DimensionMismatch(String),
    /// Error when a build or search parameter is out of range.
    InvalidParameter(String),
    /// Error when searching a tree that has not been built.
    Untrained(String),
    /// Error for general issues, e.g., during search or build.
    InternalError(String),
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdTreeError::EmptyInput(msg) => write!(f, "KD-Tree Empty Input: {}", msg),
            KdTreeError::DimensionMismatch(msg) => write!(f, "KD-Tree Dimension Mismatch: {}", msg),
            KdTreeError::InvalidParameter(msg) => write!(f, "KD-Tree Invalid Parameter: {}", msg),
            KdTreeError::Untrained(msg) => write!(f, "KD-Tree Untrained: {}", msg),
            KdTreeError::InternalError(msg) => write!(f, "KD-Tree Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for KdTreeError {}
