//! JSON Dataset Adapter
//!
//! Reads a JSON array of flat product objects, one object per row.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::criteria::Criterion;
use crate::ports::{AlternativeSource, RawAlternative, SourceError};

/// Default column holding the product name.
pub const DEFAULT_NAME_FIELD: &str = "product_name";

/// Default column holding the reference grade.
pub const DEFAULT_LABEL_FIELD: &str = "nutriscore_grade";

/// File-based dataset source
#[derive(Debug, Clone)]
pub struct JsonFileAlternativeSource {
    path: PathBuf,
    name_field: String,
    label_field: String,
}

impl JsonFileAlternativeSource {
    /// Create a source reading `path` with the default column names
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name_field: DEFAULT_NAME_FIELD.to_string(),
            label_field: DEFAULT_LABEL_FIELD.to_string(),
        }
    }

    pub fn with_name_field(mut self, field: impl Into<String>) -> Self {
        self.name_field = field.into();
        self
    }

    pub fn with_label_field(mut self, field: impl Into<String>) -> Self {
        self.label_field = field.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a whole document. Rows are numbered from 0.
    pub fn parse(&self, json: &str) -> Result<Vec<RawAlternative>, SourceError> {
        let document: Value =
            serde_json::from_str(json).map_err(|e| SourceError::Parse(e.to_string()))?;

        let rows = match document {
            Value::Array(rows) => rows,
            _ => {
                return Err(SourceError::Parse(
                    "expected a JSON array of objects".to_string(),
                ))
            }
        };

        rows.iter()
            .enumerate()
            .map(|(row, value)| match value {
                Value::Object(fields) => self.parse_row(row, fields),
                _ => Err(SourceError::Parse(format!("row {} is not an object", row))),
            })
            .collect()
    }

    fn parse_row(&self, row: usize, fields: &Map<String, Value>) -> Result<RawAlternative, SourceError> {
        let mut raw = RawAlternative::default();

        for (key, value) in fields {
            if *key == self.name_field {
                raw.name = text(value);
            } else if *key == self.label_field {
                raw.reference_label = text(value);
            } else {
                match numeric(value) {
                    Numeric::Value(v) => {
                        raw.values.insert(key.clone(), v);
                    }
                    Numeric::Absent => {}
                    Numeric::Invalid if Criterion::from_key(key).is_some() => {
                        return Err(SourceError::NonNumeric {
                            row,
                            field: key.clone(),
                        });
                    }
                    // unrelated descriptive column
                    Numeric::Invalid => {}
                }
            }
        }

        Ok(raw)
    }
}

enum Numeric {
    Value(f64),
    Absent,
    Invalid,
}

fn numeric(value: &Value) -> Numeric {
    match value {
        Value::Null => Numeric::Absent,
        Value::Number(n) => n.as_f64().map_or(Numeric::Invalid, Numeric::Value),
        Value::String(s) if s.trim().is_empty() => Numeric::Absent,
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Numeric::Value(v),
            _ => Numeric::Invalid,
        },
        _ => Numeric::Invalid,
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[async_trait]
impl AlternativeSource for JsonFileAlternativeSource {
    async fn load_alternatives(&self) -> Result<Vec<RawAlternative>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.display().to_string()));
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::IoError(e.to_string()))?;

        self.parse(&json)
    }
}
