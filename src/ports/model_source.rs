//! Model Source Port - Interface for obtaining the classification model.

use async_trait::async_trait;

use crate::domain::model::ModelDefinition;

/// Errors that can occur while loading a model definition
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelSourceError {
    #[error("Model file not found: {0}")]
    NotFound(String),

    #[error("Unsupported model file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse model: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for loading the unvalidated model definition
#[async_trait]
pub trait ModelSource: Send + Sync {
    /// Load the model definition
    ///
    /// Validation happens in the domain, not here.
    async fn load_model(&self) -> Result<ModelDefinition, ModelSourceError>;
}
