//! Pessimistic (descending, conjunctive) assignment.

use super::ConcordanceEngine;
use crate::domain::criteria::{Boundary, CriteriaModel, CriterionVector, ProfileSet};
use crate::domain::foundation::{QualityClass, Threshold};

/// Assigns the best class whose lower boundary the alternative outranks.
pub struct PessimisticClassifier;

impl PessimisticClassifier {
    /// # Algorithm
    /// Test b5, b4, b3, b2 in that order. The first boundary with
    /// `concordance(alternative, boundary) >= λ` puts the alternative in the
    /// class directly above that boundary. If none is outranked the result
    /// is E'. Sentinels b1 and b6 are never consulted.
    pub fn classify(
        criteria: &CriteriaModel,
        profiles: &ProfileSet,
        alternative: &CriterionVector,
        threshold: Threshold,
    ) -> QualityClass {
        Self::deciding_boundary(criteria, profiles, alternative, threshold)
            .map(|b| b.class_above())
            .unwrap_or(QualityClass::WORST)
    }

    /// The boundary that stopped the sweep, if any.
    pub fn deciding_boundary(
        criteria: &CriteriaModel,
        profiles: &ProfileSet,
        alternative: &CriterionVector,
        threshold: Threshold,
    ) -> Option<Boundary> {
        Boundary::DESCENDING.into_iter().find(|&boundary| {
            ConcordanceEngine::outranks(criteria, alternative, profiles.boundary(boundary), threshold)
        })
    }
}
