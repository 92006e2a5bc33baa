//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialisation failed: {0}")]
    Logging(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Probability '{0}' must be between 0 and 1")]
    InvalidProbability(&'static str),

    #[error("Bounds '{0}' are empty or inverted")]
    InvalidBounds(&'static str),

    #[error("Threshold '{0}' must be greater than zero")]
    ZeroThreshold(&'static str),

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
