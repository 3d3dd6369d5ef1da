//! Classification model configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which model to use and optional threshold override
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// YAML or JSON model file; the built-in model is used when unset
    pub path: Option<PathBuf>,

    /// Replaces the model's thresholds; same scale as the model's weights
    pub thresholds: Option<Vec<f64>>,
}

impl ModelConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::MissingRequired("model.path"));
            }
        }
        if let Some(thresholds) = &self.thresholds {
            if thresholds.is_empty() {
                return Err(ValidationError::EmptyThresholds);
            }
            for (i, t) in thresholds.iter().enumerate() {
                if !t.is_finite() || *t <= 0.0 {
                    return Err(ValidationError::InvalidThreshold(*t));
                }
                if thresholds[..i].contains(t) {
                    return Err(ValidationError::DuplicateThreshold(*t));
                }
            }
        }
        Ok(())
    }

    pub fn uses_builtin(&self) -> bool {
        self.path.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_builtin_model() {
        let config = ModelConfig::default();
        assert!(config.uses_builtin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_override_must_be_in_range() {
        let config = ModelConfig {
            path: None,
            thresholds: Some(vec![0.6, 0.0]),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidThreshold(0.0)));
    }

    #[test]
    fn percent_scale_override_is_accepted() {
        let config = ModelConfig {
            path: Some(PathBuf::from("percent-model.yaml")),
            thresholds: Some(vec![60.0, 70.0]),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn repeated_threshold_override_is_rejected() {
        let config = ModelConfig {
            path: None,
            thresholds: Some(vec![0.6, 0.7, 0.6]),
        };
        assert_eq!(config.validate(), Err(ValidationError::DuplicateThreshold(0.6)));
    }

    #[test]
    fn empty_threshold_override_is_rejected() {
        let config = ModelConfig {
            path: None,
            thresholds: Some(Vec::new()),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyThresholds));
    }
}
