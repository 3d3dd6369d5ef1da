//! Alternative Source Port - where products to classify come from.

use async_trait::async_trait;
use std::collections::BTreeMap;

/// Errors that can occur while loading alternatives
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("Row {row}: field '{field}' is not numeric")]
    NonNumeric { row: usize, field: String },

    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// One dataset row before ingestion.
///
/// `values` holds whatever numeric fields the row carried; missing
/// criteria are filled in later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAlternative {
    pub name: Option<String>,
    pub reference_label: Option<String>,
    pub values: BTreeMap<String, f64>,
}

impl RawAlternative {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.reference_label = Some(label.into());
        self
    }

    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

/// Port for loading the dataset to classify
#[async_trait]
pub trait AlternativeSource: Send + Sync {
    /// Load all rows, in dataset order
    ///
    /// # Errors
    /// Returns `SourceError` if the dataset is missing, unreadable, or has a
    /// non-numeric criterion value
    async fn load_alternatives(&self) -> Result<Vec<RawAlternative>, SourceError>;
}
