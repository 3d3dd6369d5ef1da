//! Majority threshold (lambda) value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Concordance cutoff for the outranking test.
///
/// Lives on the same scale as the criteria weights: with weights summing to
/// 1 it is a fraction, with percent weights it is a percentage. The upper
/// bound is the model's total weight, checked when a classification model
/// is assembled.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Unanimity for weights that sum to 1.
    pub const UNANIMOUS: Self = Self(1.0);

    /// Creates a Threshold, returning error unless positive and finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::out_of_range("threshold", "(0, inf)", value));
        }
        Ok(Self(value))
    }

    /// Returns the raw cutoff.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// True when `score` meets the cutoff.
    pub fn is_met_by(&self, score: f64) -> bool {
        score >= self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "λ={}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_accepts_values_in_range() {
        assert!(Threshold::try_new(0.6).is_ok());
        assert!(Threshold::try_new(1.0).is_ok());
        assert!(Threshold::try_new(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn threshold_rejects_zero_and_negative() {
        assert!(Threshold::try_new(0.0).is_err());
        assert!(Threshold::try_new(-0.5).is_err());
    }

    #[test]
    fn threshold_accepts_percent_scale() {
        assert_eq!(Threshold::try_new(70.0).unwrap().value(), 70.0);
    }

    #[test]
    fn threshold_rejects_negative_with_out_of_range() {
        match Threshold::try_new(-0.25) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "threshold");
                assert_eq!(actual, -0.25);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn threshold_rejects_non_finite() {
        assert!(Threshold::try_new(f64::NAN).is_err());
        assert!(Threshold::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn threshold_is_met_inclusively() {
        let lambda = Threshold::try_new(0.7).unwrap();
        assert!(lambda.is_met_by(0.7));
        assert!(lambda.is_met_by(0.9));
        assert!(!lambda.is_met_by(0.69));
    }

    #[test]
    fn threshold_displays_with_lambda() {
        assert_eq!(format!("{}", Threshold::try_new(0.6).unwrap()), "λ=0.6");
    }

    #[test]
    fn threshold_serializes_as_number() {
        let json = serde_json::to_string(&Threshold::try_new(0.7).unwrap()).unwrap();
        assert_eq!(json, "0.7");
    }

    #[test]
    fn threshold_deserialization_validates() {
        let ok: Threshold = serde_json::from_str("0.6").unwrap();
        assert_eq!(ok.value(), 0.6);
        assert!(serde_json::from_str::<Threshold>("-1.5").is_err());
    }
}
