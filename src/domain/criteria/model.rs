//! Criteria model: direction and weight for every criterion.

use serde::Serialize;

use super::{Criterion, CriterionSpec, ModelError};

/// Validated, immutable set of criterion specs.
///
/// Holds exactly one spec per [`Criterion`], stored in criterion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CriteriaModel {
    specs: Vec<CriterionSpec>,
}

impl CriteriaModel {
    /// Validates and orders the given specs.
    ///
    /// # Errors
    /// - `DuplicateCriterion` / `MissingCriterion` unless every criterion
    ///   appears exactly once
    /// - `InvalidWeight` for negative or non-finite weights
    /// - `ZeroTotalWeight` when no criterion carries weight
    pub fn new(specs: impl IntoIterator<Item = CriterionSpec>) -> Result<Self, ModelError> {
        let mut slots: [Option<CriterionSpec>; Criterion::COUNT] = [None; Criterion::COUNT];

        for spec in specs {
            if !spec.weight.is_finite() || spec.weight < 0.0 {
                return Err(ModelError::InvalidWeight {
                    criterion: spec.criterion,
                    weight: spec.weight,
                });
            }
            let slot = &mut slots[spec.criterion.index()];
            if slot.is_some() {
                return Err(ModelError::DuplicateCriterion(spec.criterion));
            }
            *slot = Some(spec);
        }

        let mut ordered = Vec::with_capacity(Criterion::COUNT);
        for criterion in Criterion::ALL {
            match slots[criterion.index()] {
                Some(spec) => ordered.push(spec),
                None => return Err(ModelError::MissingCriterion(criterion)),
            }
        }

        let model = Self { specs: ordered };
        if model.total_weight() <= 0.0 {
            return Err(ModelError::ZeroTotalWeight);
        }
        Ok(model)
    }

    /// Specs in criterion order.
    pub fn specs(&self) -> &[CriterionSpec] {
        &self.specs
    }

    /// Spec for one criterion.
    pub fn spec(&self, criterion: Criterion) -> &CriterionSpec {
        &self.specs[criterion.index()]
    }

    /// Sum of all weights; the scale concordance scores live on.
    pub fn total_weight(&self) -> f64 {
        self.specs.iter().map(|s| s.weight).sum()
    }

    /// True when weights sum to 1 (within float noise).
    pub fn is_normalized(&self) -> bool {
        (self.total_weight() - 1.0).abs() < 1e-9
    }
}
