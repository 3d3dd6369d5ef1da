//! Boundary profiles b1..b6 delimiting the five quality classes.

use serde::Serialize;

use super::{CriteriaModel, Criterion, CriterionVector, ModelError};
use crate::domain::foundation::QualityClass;

/// One of the four boundaries the classifiers actually test.
///
/// b1 and b6 are sentinels that close the scale and are never tested, so
/// they have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Boundary {
    /// b2, between E' and D'.
    B2,
    /// b3, between D' and C'.
    B3,
    /// b4, between C' and B'.
    B4,
    /// b5, between B' and A'.
    B5,
}

impl Boundary {
    /// Order of the pessimistic sweep.
    pub const DESCENDING: [Boundary; 4] = [Boundary::B5, Boundary::B4, Boundary::B3, Boundary::B2];

    /// Order of the optimistic sweep.
    pub const ASCENDING: [Boundary; 4] = [Boundary::B2, Boundary::B3, Boundary::B4, Boundary::B5];

    /// Profile number in b1..b6.
    pub fn profile_number(&self) -> usize {
        match self {
            Boundary::B2 => 2,
            Boundary::B3 => 3,
            Boundary::B4 => 4,
            Boundary::B5 => 5,
        }
    }

    /// Class whose lower limit this boundary is.
    pub fn class_above(&self) -> QualityClass {
        match self {
            Boundary::B5 => QualityClass::A,
            Boundary::B4 => QualityClass::B,
            Boundary::B3 => QualityClass::C,
            Boundary::B2 => QualityClass::D,
        }
    }

    /// Class whose upper limit this boundary is.
    pub fn class_below(&self) -> QualityClass {
        match self {
            Boundary::B5 => QualityClass::B,
            Boundary::B4 => QualityClass::C,
            Boundary::B3 => QualityClass::D,
            Boundary::B2 => QualityClass::E,
        }
    }
}

/// A criterion on which a higher profile is worse than the one below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderingViolation {
    /// Number of the lower profile (1..=5); the upper one is `lower + 1`.
    pub lower: usize,
    pub criterion: Criterion,
    pub lower_value: f64,
    pub upper_value: f64,
}

/// Exactly six profiles, b1 (worst sentinel) to b6 (best sentinel).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileSet {
    profiles: Vec<CriterionVector>,
}

impl ProfileSet {
    pub const COUNT: usize = 6;

    /// # Errors
    /// `ProfileCount` unless exactly six profiles are given.
    pub fn new(profiles: Vec<CriterionVector>) -> Result<Self, ModelError> {
        if profiles.len() != Self::COUNT {
            return Err(ModelError::ProfileCount {
                expected: Self::COUNT,
                actual: profiles.len(),
            });
        }
        Ok(Self { profiles })
    }

    /// Profile for a tested boundary.
    pub fn boundary(&self, boundary: Boundary) -> &CriterionVector {
        &self.profiles[boundary.profile_number() - 1]
    }

    /// Profile by number, 1-based.
    pub fn profile(&self, number: usize) -> Option<&CriterionVector> {
        number.checked_sub(1).and_then(|i| self.profiles.get(i))
    }

    /// All six profiles, b1 first.
    pub fn all(&self) -> &[CriterionVector] {
        &self.profiles
    }

    /// Lists every place where b(p+1) is not at least as good as b(p).
    pub fn ordering_violations(&self, criteria: &CriteriaModel) -> Vec<OrderingViolation> {
        let mut violations = Vec::new();

        for (i, pair) in self.profiles.windows(2).enumerate() {
            let (lower, upper) = (&pair[0], &pair[1]);
            for spec in criteria.specs() {
                let lower_value = lower.get(spec.criterion);
                let upper_value = upper.get(spec.criterion);
                if !spec.direction.is_at_least_as_good(upper_value, lower_value) {
                    violations.push(OrderingViolation {
                        lower: i + 1,
                        criterion: spec.criterion,
                        lower_value,
                        upper_value,
                    });
                }
            }
        }

        violations
    }
}
