//! Built-in and in-memory model sources.

use async_trait::async_trait;

use crate::domain::model::{nutrition_definition, ModelDefinition};
use crate::ports::{ModelSource, ModelSourceError};

/// Serves the built-in nutrition model
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinModelSource;

#[async_trait]
impl ModelSource for BuiltinModelSource {
    async fn load_model(&self) -> Result<ModelDefinition, ModelSourceError> {
        Ok(nutrition_definition())
    }
}

/// Serves a definition held in memory
#[derive(Debug, Clone)]
pub struct InMemoryModelSource {
    definition: ModelDefinition,
}

impl InMemoryModelSource {
    pub fn new(definition: ModelDefinition) -> Self {
        Self { definition }
    }
}

#[async_trait]
impl ModelSource for InMemoryModelSource {
    async fn load_model(&self) -> Result<ModelDefinition, ModelSourceError> {
        Ok(self.definition.clone())
    }
}
