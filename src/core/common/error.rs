// src/core/common/error.rs

//! Crate-wide error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OxiknnError {
    /// Malformed or incompatible training/query data, or an invalid parameter.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The operation requires a trained estimator.
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal Error: {0}")]
    Internal(String),
}

impl OxiknnError {
    /// Shorthand for an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Shorthand for an `InvalidState` error.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState { message: message.into() }
    }

    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

impl From<crate::core::indexing::vector::kdtree::KdTreeError> for OxiknnError {
    fn from(err: crate::core::indexing::vector::kdtree::KdTreeError) -> Self {
        use crate::core::indexing::vector::kdtree::KdTreeError;
        match err {
            KdTreeError::EmptyInput(s) => Self::InvalidInput { message: format!("Empty input: {s}") },
            KdTreeError::DimensionMismatch(s) => {
                Self::InvalidInput { message: format!("Dimension mismatch: {s}") }
            }
            KdTreeError::InvalidParameter(s) => Self::InvalidInput { message: s },
            KdTreeError::Untrained(s) => Self::InvalidState { message: s },
            KdTreeError::InternalError(s) => Self::Internal(format!("KD-Tree: {s}")),
        }
    }
}
