//! Class Distribution - how many alternatives landed in each class.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::foundation::{QualityClass, Threshold};
use crate::domain::outranking::{AssignmentRule, ThresholdRun};

/// Per-class counters, serialized as `{"A'": n, ..., "E'": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts([usize; 5]);

impl ClassCounts {
    pub fn record(&mut self, class: QualityClass) {
        self.0[class.index()] += 1;
    }

    pub fn get(&self, class: QualityClass) -> usize {
        self.0[class.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Share of `class` in percent, one decimal. 0 when empty.
    pub fn share(&self, class: QualityClass) -> f64 {
        percent(self.get(class), self.total())
    }
}

impl FromIterator<QualityClass> for ClassCounts {
    fn from_iter<I: IntoIterator<Item = QualityClass>>(iter: I) -> Self {
        let mut counts = Self::default();
        for class in iter {
            counts.record(class);
        }
        counts
    }
}

impl Serialize for ClassCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(QualityClass::ALL.len()))?;
        for class in QualityClass::ALL {
            map.serialize_entry(class.label(), &self.get(class))?;
        }
        map.end()
    }
}

/// Class counts for both rules at one threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDistribution {
    pub threshold: Threshold,
    pub pessimistic: ClassCounts,
    pub optimistic: ClassCounts,
}

impl ClassDistribution {
    pub fn from_run(run: &ThresholdRun) -> Self {
        Self {
            threshold: run.threshold,
            pessimistic: run.results.iter().map(|r| r.pessimistic).collect(),
            optimistic: run.results.iter().map(|r| r.optimistic).collect(),
        }
    }

    pub fn counts(&self, rule: AssignmentRule) -> &ClassCounts {
        match rule {
            AssignmentRule::Pessimistic => &self.pessimistic,
            AssignmentRule::Optimistic => &self.optimistic,
        }
    }
}

/// `part / whole` as a percentage rounded to one decimal.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / whole as f64).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::CriterionVector;
    use crate::domain::foundation::ReferenceLabel;
    use crate::domain::outranking::ClassificationResult;

    fn result(pessimistic: QualityClass, optimistic: QualityClass) -> ClassificationResult {
        ClassificationResult {
            threshold: Threshold::try_new(0.7).unwrap(),
            alternative_index: 0,
            name: "x".to_string(),
            reference_label: ReferenceLabel::Unavailable,
            pessimistic,
            optimistic,
            values: CriterionVector::zero(),
        }
    }

    #[test]
    fn counts_each_rule_separately() {
        let run = ThresholdRun {
            threshold: Threshold::try_new(0.7).unwrap(),
            results: vec![
                result(QualityClass::D, QualityClass::C),
                result(QualityClass::D, QualityClass::B),
                result(QualityClass::E, QualityClass::E),
            ],
        };

        let distribution = ClassDistribution::from_run(&run);
        assert_eq!(distribution.pessimistic.get(QualityClass::D), 2);
        assert_eq!(distribution.pessimistic.get(QualityClass::E), 1);
        assert_eq!(distribution.pessimistic.get(QualityClass::A), 0);
        assert_eq!(distribution.counts(AssignmentRule::Optimistic).get(QualityClass::B), 1);
        assert_eq!(distribution.optimistic.total(), 3);
    }

    #[test]
    fn share_is_rounded_percentage() {
        let counts: ClassCounts = [QualityClass::A, QualityClass::B, QualityClass::B]
            .into_iter()
            .collect();
        assert_eq!(counts.share(QualityClass::B), 66.7);
        assert_eq!(counts.share(QualityClass::A), 33.3);
        assert_eq!(ClassCounts::default().share(QualityClass::A), 0.0);
    }

    #[test]
    fn counts_serialize_keyed_by_label() {
        let counts: ClassCounts = [QualityClass::C].into_iter().collect();
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["C'"], 1);
        assert_eq!(json["A'"], 0);
    }
}
