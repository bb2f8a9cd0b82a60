// src/core/types/mod.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete class label attached to a training sample.
pub type Label = String;

/// Kind of a feature column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Continuous,
    Categorical,
}

impl DataType {
    pub const fn type_name(&self) -> &'static str {
        match self {
            DataType::Continuous => "continuous",
            DataType::Categorical => "categorical",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A single feature value of a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    Continuous(f64),
    Categorical(String),
}

impl Feature {
    pub const fn data_type(&self) -> DataType {
        match self {
            Feature::Continuous(_) => DataType::Continuous,
            Feature::Categorical(_) => DataType::Categorical,
        }
    }

    /// Returns the numeric value for continuous features.
    pub const fn as_continuous(&self) -> Option<f64> {
        match self {
            Feature::Continuous(v) => Some(*v),
            Feature::Categorical(_) => None,
        }
    }
}

impl From<f64> for Feature {
    fn from(value: f64) -> Self {
        Feature::Continuous(value)
    }
}

impl From<&str> for Feature {
    fn from(value: &str) -> Self {
        Feature::Categorical(value.to_string())
    }
}

impl From<String> for Feature {
    fn from(value: String) -> Self {
        Feature::Categorical(value)
    }
}

/// Tag identifying what kind of estimator a model is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EstimatorType {
    Classifier,
}

impl fmt::Display for EstimatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorType::Classifier => f.write_str("classifier"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_data_types() {
        assert_eq!(Feature::from(1.5).data_type(), DataType::Continuous);
        assert_eq!(Feature::from("red").data_type(), DataType::Categorical);
        assert_eq!(Feature::from(2.0).as_continuous(), Some(2.0));
        assert_eq!(Feature::from("red").as_continuous(), None);
    }

    #[test]
    fn test_display_tags() {
        assert_eq!(DataType::Continuous.to_string(), "continuous");
        assert_eq!(DataType::Categorical.to_string(), "categorical");
        assert_eq!(EstimatorType::Classifier.to_string(), "classifier");
    }
}
