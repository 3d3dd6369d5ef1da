//! In-Memory Dataset Adapter
//!
//! Serves a fixed list of rows. Useful for testing and embedding.

use async_trait::async_trait;

use crate::ports::{AlternativeSource, RawAlternative, SourceError};

/// In-memory dataset
#[derive(Debug, Clone, Default)]
pub struct InMemoryAlternativeSource {
    rows: Vec<RawAlternative>,
    error: Option<SourceError>,
}

impl InMemoryAlternativeSource {
    pub fn new(rows: Vec<RawAlternative>) -> Self {
        Self { rows, error: None }
    }

    /// A source whose every load fails with `error`
    pub fn failing(error: SourceError) -> Self {
        Self {
            rows: Vec::new(),
            error: Some(error),
        }
    }
}

#[async_trait]
impl AlternativeSource for InMemoryAlternativeSource {
    async fn load_alternatives(&self) -> Result<Vec<RawAlternative>, SourceError> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.rows.clone()),
        }
    }
}
