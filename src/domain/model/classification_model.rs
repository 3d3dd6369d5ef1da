//! The immutable configuration value a classification run is a function of.

use crate::domain::criteria::{CriteriaModel, ModelError, OrderingViolation, ProfileSet};
use crate::domain::foundation::Threshold;

/// Criteria, boundary profiles and the thresholds to run with.
///
/// Passed explicitly into the batch runner; nothing about a run is read
/// from shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationModel {
    criteria: CriteriaModel,
    profiles: ProfileSet,
    thresholds: Vec<Threshold>,
}

impl ClassificationModel {
    /// # Errors
    /// - `NoThresholds` when `thresholds` is empty
    /// - `ThresholdAboveTotalWeight` when a threshold could never be met
    /// - `DuplicateThreshold` when the same cutoff appears twice
    pub fn new(
        criteria: CriteriaModel,
        profiles: ProfileSet,
        thresholds: Vec<Threshold>,
    ) -> Result<Self, ModelError> {
        if thresholds.is_empty() {
            return Err(ModelError::NoThresholds);
        }
        let total_weight = criteria.total_weight();
        for (i, threshold) in thresholds.iter().enumerate() {
            if threshold.value() > total_weight {
                return Err(ModelError::ThresholdAboveTotalWeight {
                    threshold: threshold.value(),
                    total_weight,
                });
            }
            if thresholds[..i].contains(threshold) {
                return Err(ModelError::DuplicateThreshold(threshold.value()));
            }
        }
        Ok(Self {
            criteria,
            profiles,
            thresholds,
        })
    }

    /// Same criteria and profiles, different thresholds.
    pub fn with_thresholds(&self, thresholds: Vec<Threshold>) -> Result<Self, ModelError> {
        Self::new(self.criteria.clone(), self.profiles.clone(), thresholds)
    }

    pub fn criteria(&self) -> &CriteriaModel {
        &self.criteria
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    /// Thresholds in run order.
    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    /// Profile ordering problems worth surfacing to the operator.
    pub fn ordering_violations(&self) -> Vec<OrderingViolation> {
        self.profiles.ordering_violations(&self.criteria)
    }
}
