//! File-based Model Source
//!
//! Loads a model definition from YAML (`.yaml`, `.yml`) or JSON (`.json`).

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::model::ModelDefinition;
use crate::ports::{ModelSource, ModelSourceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModelFormat {
    Yaml,
    Json,
}

/// Model definition stored on disk
#[derive(Debug, Clone)]
pub struct FileModelSource {
    path: PathBuf,
}

impl FileModelSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn format(&self) -> Result<ModelFormat, ModelSourceError> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(ModelFormat::Yaml),
            Some("json") => Ok(ModelFormat::Json),
            _ => Err(ModelSourceError::UnsupportedFormat(
                self.path.display().to_string(),
            )),
        }
    }
}

#[async_trait]
impl ModelSource for FileModelSource {
    async fn load_model(&self) -> Result<ModelDefinition, ModelSourceError> {
        let format = self.format()?;

        if !self.path.exists() {
            return Err(ModelSourceError::NotFound(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ModelSourceError::IoError(e.to_string()))?;

        match format {
            ModelFormat::Yaml => serde_yaml::from_str(&content)
                .map_err(|e| ModelSourceError::Parse(e.to_string())),
            ModelFormat::Json => serde_json::from_str(&content)
                .map_err(|e| ModelSourceError::Parse(e.to_string())),
        }
    }
}
