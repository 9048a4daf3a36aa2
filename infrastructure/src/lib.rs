//! Infrastructure layer for daily-breath
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigOverrides, ConfigValidationError, Environment,
    FileApiConfig, FileConfig, FileOutputConfig,
};
pub use gateway::HttpPredictionGateway;
