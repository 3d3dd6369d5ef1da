//! Concordance Engine - weighted "at least as good as" score between two vectors.

use crate::domain::criteria::{CriteriaModel, CriterionVector};
use crate::domain::foundation::Threshold;

/// Pairwise concordance computations.
pub struct ConcordanceEngine;

impl ConcordanceEngine {
    /// Computes the concordance of `subject` with `reference`.
    ///
    /// # Algorithm
    /// score = Σ weight(c) over criteria c where subject is at least as good
    /// as reference (`>=` for benefit criteria, `<=` for cost criteria).
    ///
    /// Weights are summed in criterion order and the sum is not normalized,
    /// so the result lies in `[0, total_weight]`. There is no discordance
    /// or veto component.
    pub fn concordance(
        criteria: &CriteriaModel,
        subject: &CriterionVector,
        reference: &CriterionVector,
    ) -> f64 {
        let mut score = 0.0;

        for spec in criteria.specs() {
            let s = subject.get(spec.criterion);
            let r = reference.get(spec.criterion);
            if spec.direction.is_at_least_as_good(s, r) {
                score += spec.weight;
            }
        }

        score
    }

    /// Outranking test: `subject S reference` at the given threshold.
    pub fn outranks(
        criteria: &CriteriaModel,
        subject: &CriterionVector,
        reference: &CriterionVector,
        threshold: Threshold,
    ) -> bool {
        threshold.is_met_by(Self::concordance(criteria, subject, reference))
    }

    /// Strict preference: `subject S reference` and not `reference S subject`.
    pub fn strictly_prefers(
        criteria: &CriteriaModel,
        subject: &CriterionVector,
        reference: &CriterionVector,
        threshold: Threshold,
    ) -> bool {
        Self::outranks(criteria, subject, reference, threshold)
            && !Self::outranks(criteria, reference, subject, threshold)
    }
}
