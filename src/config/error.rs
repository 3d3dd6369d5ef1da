//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Field name '{0}' is used for both name and reference grade")]
    ConflictingFields(String),

    #[error("Threshold override must be positive and finite, got {0}")]
    InvalidThreshold(f64),

    #[error("Threshold override lists {0} more than once")]
    DuplicateThreshold(f64),

    #[error("Threshold override list is empty")]
    EmptyThresholds,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
