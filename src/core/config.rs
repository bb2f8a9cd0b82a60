// src/core/config.rs

use crate::core::common::OxiknnError;
use crate::core::indexing::vector::kdtree::DEFAULT_MAX_LEAF_SIZE;
use crate::core::vector::distance::DistanceMetric;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a k-nearest-neighbor classifier.
///
/// Loaded from TOML, e.g.
///
/// ```toml
/// k = 3
/// metric = "manhattan"
/// weighted = true
/// max_leaf_size = 20
/// neighborhood_buffer = 0.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Number of neighbors consulted per prediction.
    pub k: usize,
    pub metric: DistanceMetric,
    /// Weight votes by `1 / (1 + distance)` instead of uniformly.
    pub weighted: bool,
    /// Leaf capacity of the KD-tree.
    pub max_leaf_size: usize,
    /// Pruning relaxation for approximate search; 0 means exact.
    pub neighborhood_buffer: f64,
}

/// Builder for `Config`.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    k: Option<usize>,
    metric: Option<DistanceMetric>,
    weighted: Option<bool>,
    max_leaf_size: Option<usize>,
    neighborhood_buffer: Option<f64>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = Some(weighted);
        self
    }

    pub fn max_leaf_size(mut self, size: usize) -> Self {
        self.max_leaf_size = Some(size);
        self
    }

    pub fn neighborhood_buffer(mut self, buffer: f64) -> Self {
        self.neighborhood_buffer = Some(buffer);
        self
    }

    /// Builds the Config instance with validation
    pub fn build(self) -> Result<Config, OxiknnError> {
        let defaults = Config::default();
        let config = Config {
            k: self.k.unwrap_or(defaults.k),
            metric: self.metric.unwrap_or(defaults.metric),
            weighted: self.weighted.unwrap_or(defaults.weighted),
            max_leaf_size: self.max_leaf_size.unwrap_or(defaults.max_leaf_size),
            neighborhood_buffer: self.neighborhood_buffer.unwrap_or(defaults.neighborhood_buffer),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            k: 5,
            metric: DistanceMetric::Euclidean,
            weighted: true,
            max_leaf_size: DEFAULT_MAX_LEAF_SIZE,
            neighborhood_buffer: 0.0,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), OxiknnError> {
        if self.k == 0 {
            return Err(OxiknnError::Configuration("k must be greater than 0".to_string()));
        }

        if self.max_leaf_size == 0 {
            return Err(OxiknnError::Configuration(
                "max_leaf_size must be greater than 0".to_string(),
            ));
        }

        if !(self.neighborhood_buffer.is_finite() && self.neighborhood_buffer >= 0.0) {
            return Err(OxiknnError::Configuration(
                "neighborhood_buffer must be a non-negative number".to_string(),
            ));
        }

        if let DistanceMetric::Minkowski { p } = self.metric {
            if !(p.is_finite() && p >= 1.0) {
                return Err(OxiknnError::Configuration(format!(
                    "minkowski p must be at least 1, got {}",
                    p
                )));
            }
        }

        Ok(())
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `OxiknnError::Configuration` if parsing or validation fails,
    /// `OxiknnError::Io` if the file exists but cannot be read.
    pub fn load_from_file(path: &Path) -> Result<Self, OxiknnError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| {
                    OxiknnError::Configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                config.validate()?;
                debug!("Loaded classifier config from {}: {:?}", path.display(), config);
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(OxiknnError::Io(e)),
        }
    }

    /// Loads configuration from an optional TOML file path.
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, OxiknnError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, OxiknnError> {
        toml::to_string(self).map_err(|e| OxiknnError::Configuration(e.to_string()))
    }
}
