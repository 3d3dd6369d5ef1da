//! Optimistic (ascending, disjunctive) assignment.

use super::ConcordanceEngine;
use crate::domain::criteria::{Boundary, CriteriaModel, CriterionVector, ProfileSet};
use crate::domain::foundation::{QualityClass, Threshold};

/// Assigns the class just below the first boundary strictly preferred to
/// the alternative.
pub struct OptimisticClassifier;

impl OptimisticClassifier {
    /// # Algorithm
    /// Test b2, b3, b4, b5 in that order. For each boundary b compute
    /// `S1 = concordance(b, alternative)` and `S2 = concordance(alternative, b)`.
    /// b is strictly preferred when `S1 >= λ` and `S2 < λ`; the first such
    /// boundary puts the alternative in the class directly below it. If no
    /// boundary is strictly preferred the result is A'.
    ///
    /// Indifference (both directions outrank) and incomparability (neither
    /// does) let the sweep continue upward.
    pub fn classify(
        criteria: &CriteriaModel,
        profiles: &ProfileSet,
        alternative: &CriterionVector,
        threshold: Threshold,
    ) -> QualityClass {
        Self::deciding_boundary(criteria, profiles, alternative, threshold)
            .map(|b| b.class_below())
            .unwrap_or(QualityClass::BEST)
    }

    /// The boundary that stopped the sweep, if any.
    pub fn deciding_boundary(
        criteria: &CriteriaModel,
        profiles: &ProfileSet,
        alternative: &CriterionVector,
        threshold: Threshold,
    ) -> Option<Boundary> {
        Boundary::ASCENDING.into_iter().find(|&boundary| {
            ConcordanceEngine::strictly_prefers(
                criteria,
                profiles.boundary(boundary),
                alternative,
                threshold,
            )
        })
    }
}
