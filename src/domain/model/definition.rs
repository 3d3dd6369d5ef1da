//! Serializable shape of a classification model.
//!
//! This is what model files contain and what run reports echo back. It is
//! plain data; [`ModelDefinition::into_model`] is the one place it gets
//! validated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ClassificationModel;
use crate::domain::criteria::{
    CriteriaModel, Criterion, CriterionSpec, CriterionVector, Direction, ModelError, ProfileSet,
    UnknownKeys,
};
use crate::domain::foundation::Threshold;

/// Direction and weight of a criterion, keyed by its external name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionDefinition {
    pub criterion: String,
    pub direction: Direction,
    pub weight: f64,
}

/// Unvalidated model: criteria list, six profiles, thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub criteria: Vec<CriterionDefinition>,
    /// b1..b6 as key/value maps; absent criteria default to 0.
    pub profiles: Vec<BTreeMap<String, f64>>,
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<f64>,
}

pub(crate) fn default_thresholds() -> Vec<f64> {
    vec![0.6, 0.7]
}

impl ModelDefinition {
    /// Validates the definition into a usable model.
    ///
    /// # Errors
    /// Any [`ModelError`]: unknown or missing criteria, bad weights, a
    /// profile naming an unknown criterion, wrong profile count, or a
    /// threshold list that is empty, repeats a value, or holds a value that
    /// is non-positive or above the total weight.
    pub fn into_model(self) -> Result<ClassificationModel, ModelError> {
        let specs = self
            .criteria
            .iter()
            .map(|def| {
                Criterion::from_key(&def.criterion)
                    .map(|c| CriterionSpec::new(c, def.direction, def.weight))
                    .ok_or_else(|| ModelError::UnknownCriterion(def.criterion.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let criteria = CriteriaModel::new(specs)?;

        let vectors = self
            .profiles
            .iter()
            .enumerate()
            .map(|(i, map)| {
                CriterionVector::from_entries(
                    map.iter().map(|(k, v)| (k.as_str(), *v)),
                    UnknownKeys::Reject,
                )
                .map_err(|source| ModelError::InvalidProfile {
                    profile: i + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let profiles = ProfileSet::new(vectors)?;

        let thresholds = self
            .thresholds
            .iter()
            .map(|v| Threshold::try_new(*v))
            .collect::<Result<Vec<_>, _>>()?;

        ClassificationModel::new(criteria, profiles, thresholds)
    }

    /// Echo of a validated model, for audit output.
    pub fn from_model(model: &ClassificationModel) -> Self {
        Self {
            criteria: model
                .criteria()
                .specs()
                .iter()
                .map(|spec| CriterionDefinition {
                    criterion: spec.criterion.key().to_string(),
                    direction: spec.direction,
                    weight: spec.weight,
                })
                .collect(),
            profiles: model
                .profiles()
                .all()
                .iter()
                .map(|p| {
                    p.to_entries()
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v))
                        .collect()
                })
                .collect(),
            thresholds: model.thresholds().iter().map(|t| t.value()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::nutrition_definition;

    #[test]
    fn default_definition_validates() {
        let model = nutrition_definition().into_model().unwrap();
        assert_eq!(model.thresholds().len(), 2);
        assert_eq!(model.profiles().all().len(), ProfileSet::COUNT);
    }

    #[test]
    fn unknown_criterion_in_criteria_is_fatal() {
        let mut def = nutrition_definition();
        def.criteria[0].criterion = "salt_100g".to_string();
        assert_eq!(
            def.into_model().unwrap_err(),
            ModelError::UnknownCriterion("salt_100g".to_string())
        );
    }

    #[test]
    fn missing_criterion_in_criteria_is_fatal() {
        let mut def = nutrition_definition();
        def.criteria.retain(|c| c.criterion != "fiber_100g");
        assert_eq!(
            def.into_model().unwrap_err(),
            ModelError::MissingCriterion(Criterion::Fiber)
        );
    }

    #[test]
    fn profile_with_unknown_criterion_is_fatal() {
        let mut def = nutrition_definition();
        def.profiles[2].insert("salt_100g".to_string(), 1.0);
        match def.into_model().unwrap_err() {
            ModelError::InvalidProfile { profile, .. } => assert_eq!(profile, 3),
            other => panic!("Expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn profile_missing_a_criterion_defaults_to_zero() {
        let mut def = nutrition_definition();
        def.profiles[3].remove("sodium_100g");
        let model = def.into_model().unwrap();
        assert_eq!(model.profiles().profile(4).unwrap().get(Criterion::Sodium), 0.0);
    }

    #[test]
    fn wrong_profile_count_is_fatal() {
        let mut def = nutrition_definition();
        def.profiles.pop();
        assert!(matches!(
            def.into_model(),
            Err(ModelError::ProfileCount { actual: 5, .. })
        ));
    }

    #[test]
    fn non_positive_threshold_is_fatal() {
        let mut def = nutrition_definition();
        def.thresholds = vec![0.6, 0.0];
        assert!(matches!(
            def.into_model(),
            Err(ModelError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn threshold_above_total_weight_is_fatal() {
        let mut def = nutrition_definition();
        def.thresholds = vec![0.6, 1.2];
        assert!(matches!(
            def.into_model(),
            Err(ModelError::ThresholdAboveTotalWeight { threshold, .. }) if threshold == 1.2
        ));
    }

    #[test]
    fn percent_weights_accept_percent_thresholds() {
        let mut def = nutrition_definition();
        for criterion in &mut def.criteria {
            criterion.weight = (criterion.weight * 100.0).round();
        }
        def.thresholds = vec![70.0];
        let model = def.into_model().unwrap();
        assert_eq!(model.thresholds()[0].value(), 70.0);
    }

    #[test]
    fn repeated_threshold_is_fatal() {
        let mut def = nutrition_definition();
        def.thresholds = vec![0.7, 0.7];
        assert_eq!(def.into_model().unwrap_err(), ModelError::DuplicateThreshold(0.7));
    }

    #[test]
    fn thresholds_default_when_omitted() {
        let yaml = serde_yaml::to_string(&nutrition_definition()).unwrap();
        let trimmed: String = yaml
            .lines()
            .take_while(|l| !l.starts_with("thresholds"))
            .map(|l| format!("{}\n", l))
            .collect();
        let def: ModelDefinition = serde_yaml::from_str(&trimmed).unwrap();
        assert_eq!(def.thresholds, vec![0.6, 0.7]);
    }

    #[test]
    fn echo_round_trips_through_validation() {
        let model = nutrition_definition().into_model().unwrap();
        let echoed = ModelDefinition::from_model(&model).into_model().unwrap();
        assert_eq!(echoed, model);
    }
}
