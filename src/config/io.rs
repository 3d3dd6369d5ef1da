//! Dataset input and report output configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::dataset::{DEFAULT_LABEL_FIELD, DEFAULT_NAME_FIELD};
use crate::adapters::report::ReportFormat;

/// Where the dataset comes from
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// JSON file holding an array of product objects
    #[serde(default = "default_input_path")]
    pub path: PathBuf,

    /// Column with the product name
    #[serde(default = "default_name_field")]
    pub name_field: String,

    /// Column with the reference grade
    #[serde(default = "default_label_field")]
    pub label_field: String,
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("input.path"));
        }
        if self.name_field.trim().is_empty() {
            return Err(ValidationError::MissingRequired("input.name_field"));
        }
        if self.label_field.trim().is_empty() {
            return Err(ValidationError::MissingRequired("input.label_field"));
        }
        if self.name_field == self.label_field {
            return Err(ValidationError::ConflictingFields(self.name_field.clone()));
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            name_field: default_name_field(),
            label_field: default_label_field(),
        }
    }
}

/// Where the report goes
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub format: ReportFormat,
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("output.path"));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: ReportFormat::default(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("data/products.json")
}

fn default_name_field() -> String {
    DEFAULT_NAME_FIELD.to_string()
}

fn default_label_field() -> String {
    DEFAULT_LABEL_FIELD.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("out/report.json")
}
