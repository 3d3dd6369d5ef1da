//! Errors raised while validating criteria, vectors and profiles.

use thiserror::Error;

use super::Criterion;
use crate::domain::foundation::ValidationError;

/// A key/value mapping could not be turned into a criterion vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("Unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("Criterion '{criterion}' has non-finite value {value}")]
    NonFinite { criterion: Criterion, value: f64 },
}

/// The classification model is unusable. Always fatal, raised before any
/// alternative is classified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Criterion '{0}' is not defined in the criteria model")]
    MissingCriterion(Criterion),

    #[error("Criterion '{0}' is defined more than once")]
    DuplicateCriterion(Criterion),

    #[error("Criteria model references unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("Criterion '{criterion}' has invalid weight {weight}")]
    InvalidWeight { criterion: Criterion, weight: f64 },

    #[error("Criteria weights sum to zero")]
    ZeroTotalWeight,

    #[error("Expected {expected} profiles, got {actual}")]
    ProfileCount { expected: usize, actual: usize },

    #[error("Profile b{profile} is invalid: {source}")]
    InvalidProfile {
        profile: usize,
        #[source]
        source: VectorError,
    },

    #[error("At least one threshold is required")]
    NoThresholds,

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(#[from] ValidationError),

    #[error("Threshold {threshold} exceeds the total criteria weight {total_weight}")]
    ThresholdAboveTotalWeight { threshold: f64, total_weight: f64 },

    #[error("Threshold {0} is listed more than once")]
    DuplicateThreshold(f64),
}
