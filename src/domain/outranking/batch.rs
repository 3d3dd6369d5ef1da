//! Batch Runner - applies both classifiers to every (threshold, alternative) pair.

use serde::{Deserialize, Serialize};

use super::{OptimisticClassifier, PessimisticClassifier};
use crate::domain::criteria::CriterionVector;
use crate::domain::foundation::{QualityClass, ReferenceLabel, Threshold};
use crate::domain::model::ClassificationModel;

/// Which assignment procedure produced a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentRule {
    Pessimistic,
    Optimistic,
}

impl AssignmentRule {
    pub const ALL: [AssignmentRule; 2] = [AssignmentRule::Pessimistic, AssignmentRule::Optimistic];
}

/// A product ready to be classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Position in the input dataset.
    pub index: usize,
    pub name: String,
    pub reference_label: ReferenceLabel,
    pub values: CriterionVector,
}

impl Alternative {
    /// Creates an alternative; a missing name becomes `product_{index}` and
    /// the raw grade is normalized.
    pub fn new(
        index: usize,
        name: Option<String>,
        raw_label: Option<&str>,
        values: CriterionVector,
    ) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("product_{}", index));
        Self {
            index,
            name,
            reference_label: ReferenceLabel::normalize(raw_label),
            values,
        }
    }
}

/// Outcome for one alternative at one threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub threshold: Threshold,
    pub alternative_index: usize,
    pub name: String,
    pub reference_label: ReferenceLabel,
    pub pessimistic: QualityClass,
    pub optimistic: QualityClass,
    pub values: CriterionVector,
}

impl ClassificationResult {
    /// Class assigned by the given rule.
    pub fn class_for(&self, rule: AssignmentRule) -> QualityClass {
        match rule {
            AssignmentRule::Pessimistic => self.pessimistic,
            AssignmentRule::Optimistic => self.optimistic,
        }
    }
}

/// All results for one threshold, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRun {
    pub threshold: Threshold,
    pub results: Vec<ClassificationResult>,
}

/// Drives both classifiers over a dataset.
pub struct BatchRunner;

impl BatchRunner {
    /// Classifies one alternative at one threshold.
    pub fn classify(
        model: &ClassificationModel,
        alternative: &Alternative,
        threshold: Threshold,
    ) -> ClassificationResult {
        let criteria = model.criteria();
        let profiles = model.profiles();

        ClassificationResult {
            threshold,
            alternative_index: alternative.index,
            name: alternative.name.clone(),
            reference_label: alternative.reference_label,
            pessimistic: PessimisticClassifier::classify(
                criteria,
                profiles,
                &alternative.values,
                threshold,
            ),
            optimistic: OptimisticClassifier::classify(
                criteria,
                profiles,
                &alternative.values,
                threshold,
            ),
            values: alternative.values,
        }
    }

    /// Flat result list ordered by (threshold position, alternative index).
    pub fn run(model: &ClassificationModel, alternatives: &[Alternative]) -> Vec<ClassificationResult> {
        Self::run_grouped(model, alternatives)
            .into_iter()
            .flat_map(|run| run.results)
            .collect()
    }

    /// One [`ThresholdRun`] per configured threshold, in configured order.
    ///
    /// Every (threshold, alternative) pair is independent; results within a
    /// run are sorted by alternative index so output is reproducible
    /// whatever order the input slice came in.
    pub fn run_grouped(model: &ClassificationModel, alternatives: &[Alternative]) -> Vec<ThresholdRun> {
        model
            .thresholds()
            .iter()
            .map(|&threshold| {
                let mut results: Vec<_> = alternatives
                    .iter()
                    .map(|alt| Self::classify(model, alt, threshold))
                    .collect();
                results.sort_by_key(|r| r.alternative_index);
                ThresholdRun { threshold, results }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::nutrition_default;

    fn alternative(index: usize, label: Option<&str>, values: [f64; 8]) -> Alternative {
        Alternative::new(
            index,
            Some(format!("item-{}", index)),
            label,
            CriterionVector::from_values(values).unwrap(),
        )
    }

    fn dataset() -> Vec<Alternative> {
        vec![
            alternative(0, Some("a"), [150.0, 3.0, 1.0, 0.02, 90.0, 8.0, 10.0, 0.0]),
            alternative(1, Some("E"), [900.0, 80.0, 60.0, 30.0, 0.0, 0.0, 0.0, 20.0]),
            alternative(2, Some("x"), [540.0, 56.0, 31.0, 0.04, 13.0, 3.5, 6.0, 2.0]),
        ]
    }

    #[test]
    fn alternative_defaults_name_and_normalizes_label() {
        let alt = Alternative::new(7, None, Some(" b "), CriterionVector::zero());
        assert_eq!(alt.name, "product_7");
        assert_eq!(alt.reference_label, ReferenceLabel::B);

        let blank = Alternative::new(3, Some("   ".to_string()), Some("Z"), CriterionVector::zero());
        assert_eq!(blank.name, "product_3");
        assert_eq!(blank.reference_label, ReferenceLabel::Unavailable);
    }

    #[test]
    fn run_emits_one_result_per_threshold_and_alternative() {
        let model = nutrition_default().unwrap();
        let results = BatchRunner::run(&model, &dataset());

        assert_eq!(results.len(), 2 * 3);
        assert!(results[..3].iter().all(|r| r.threshold.value() == 0.6));
        assert!(results[3..].iter().all(|r| r.threshold.value() == 0.7));
        let indices: Vec<_> = results.iter().map(|r| r.alternative_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn run_carries_identity_label_and_values() {
        let model = nutrition_default().unwrap();
        let data = dataset();
        let results = BatchRunner::run(&model, &data);

        assert_eq!(results[0].name, "item-0");
        assert_eq!(results[0].reference_label, ReferenceLabel::A);
        assert_eq!(results[2].reference_label, ReferenceLabel::Unavailable);
        assert_eq!(results[2].values, data[2].values);
    }

    #[test]
    fn run_assigns_both_classes_per_threshold() {
        let model = nutrition_default().unwrap();
        let runs = BatchRunner::run_grouped(&model, &dataset());

        let at_06 = &runs[0].results;
        assert_eq!(at_06[0].pessimistic, QualityClass::A);
        assert_eq!(at_06[0].optimistic, QualityClass::A);
        assert_eq!(at_06[2].pessimistic, QualityClass::C);
        assert_eq!(at_06[2].optimistic, QualityClass::C);

        let at_07 = &runs[1].results;
        assert_eq!(at_07[1].pessimistic, QualityClass::E);
        assert_eq!(at_07[1].optimistic, QualityClass::E);
        assert_eq!(at_07[2].pessimistic, QualityClass::D);
        assert_eq!(at_07[2].optimistic, QualityClass::C);
        assert_eq!(at_07[2].class_for(AssignmentRule::Optimistic), QualityClass::C);
    }

    #[test]
    fn output_order_does_not_depend_on_input_order() {
        let model = nutrition_default().unwrap();
        let mut shuffled = dataset();
        shuffled.reverse();

        assert_eq!(
            BatchRunner::run(&model, &shuffled),
            BatchRunner::run(&model, &dataset())
        );
    }

    #[test]
    fn empty_dataset_yields_empty_runs() {
        let model = nutrition_default().unwrap();
        let runs = BatchRunner::run_grouped(&model, &[]);
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|r| r.results.is_empty()));
    }

    #[test]
    fn result_serializes_with_class_labels() {
        let model = nutrition_default().unwrap();
        let results = BatchRunner::run(&model, &dataset());
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["pessimistic"], "A'");
        assert_eq!(json["reference_label"], "A");
        assert_eq!(json["threshold"], 0.6);
        assert_eq!(json["values"]["fiber_100g"], 8.0);
    }
}
