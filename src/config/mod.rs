//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from an optional config file named by
//! `ELECTRE_TRI_CONFIG`, then from environment variables with the
//! `ELECTRE_TRI` prefix; nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use electre_tri::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading products from {}", config.input.path.display());
//! ```

mod error;
mod io;
mod logging;
mod model;

pub use error::{ConfigError, ValidationError};
pub use io::{InputConfig, OutputConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use model::ModelConfig;

use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming an optional YAML/JSON/TOML config file.
pub const CONFIG_FILE_VAR: &str = "ELECTRE_TRI_CONFIG";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dataset location and column names
    #[serde(default)]
    pub input: InputConfig,

    /// Report location and format
    #[serde(default)]
    pub output: OutputConfig,

    /// Model file and threshold override
    #[serde(default)]
    pub model: ModelConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the optional file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the file named by `ELECTRE_TRI_CONFIG`, if set
    /// 3. Reads environment variables with `ELECTRE_TRI` prefix, which win
    ///    over file values
    ///
    /// # Environment Variable Format
    ///
    /// - `ELECTRE_TRI__INPUT__PATH=data/spreads.json` -> `input.path`
    /// - `ELECTRE_TRI__OUTPUT__FORMAT=yaml` -> `output.format`
    /// - `ELECTRE_TRI__MODEL__THRESHOLDS=0.6,0.75` -> `model.thresholds`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or a value
    /// cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let file = std::env::var(CONFIG_FILE_VAR)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self::load_from(file)
    }

    /// Same as [`AppConfig::load`] with an explicit config file.
    pub fn load_from(file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("ELECTRE_TRI")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("model.thresholds")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a path is empty, the threshold override
    /// is out of range, or the log filter does not parse.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.input.validate()?;
        self.output.validate()?;
        self.model.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
