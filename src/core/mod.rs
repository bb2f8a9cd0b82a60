pub mod classifiers;
pub mod common;
pub mod config;
pub mod dataset;
pub mod indexing;
pub mod metrics;
pub mod types;
pub mod vector;
pub use self::config::Config;
