//! Run Report - everything a classification run produced, ready for export.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{AgreementAnalyzer, AgreementStats, ClassDistribution};
use crate::domain::foundation::{RunId, Threshold};
use crate::domain::model::{ClassificationModel, ModelDefinition};
use crate::domain::outranking::{ClassificationResult, ThresholdRun};

/// Results and summaries for one threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdReport {
    pub threshold: Threshold,
    pub distribution: ClassDistribution,
    /// None when no result carried a usable reference grade.
    pub agreement: Option<AgreementStats>,
    pub results: Vec<ClassificationResult>,
}

impl ThresholdReport {
    pub fn from_run(run: ThresholdRun) -> Self {
        Self {
            threshold: run.threshold,
            distribution: ClassDistribution::from_run(&run),
            agreement: AgreementAnalyzer::compare(&run),
            results: run.results,
        }
    }
}

/// Output of one run, grouped by threshold, with the model echoed for audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub computed_at: DateTime<Utc>,
    pub model: ModelDefinition,
    pub alternative_count: usize,
    /// Alternatives with a usable reference grade.
    pub graded_count: usize,
    pub thresholds: Vec<ThresholdReport>,
}

impl RunReport {
    /// Assembles the report from grouped runs.
    pub fn build(model: &ClassificationModel, runs: Vec<ThresholdRun>) -> Self {
        let first = runs.first();
        let alternative_count = first.map(|r| r.results.len()).unwrap_or(0);
        let graded_count = first
            .map(|r| {
                r.results
                    .iter()
                    .filter(|res| res.reference_label.is_available())
                    .count()
            })
            .unwrap_or(0);

        Self {
            run_id: RunId::new(),
            computed_at: Utc::now(),
            model: ModelDefinition::from_model(model),
            alternative_count,
            graded_count,
            thresholds: runs.into_iter().map(ThresholdReport::from_run).collect(),
        }
    }

    /// Report for a given threshold value, if it was part of the run.
    /// Thresholds within a model are distinct, so at most one matches.
    pub fn for_threshold(&self, value: f64) -> Option<&ThresholdReport> {
        self.thresholds.iter().find(|t| t.threshold.value() == value)
    }

    /// All results, ordered by (threshold, alternative index).
    pub fn results(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.thresholds.iter().flat_map(|t| t.results.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::CriterionVector;
    use crate::domain::foundation::QualityClass;
    use crate::domain::model::nutrition_default;
    use crate::domain::outranking::{Alternative, BatchRunner};

    fn dataset() -> Vec<Alternative> {
        vec![
            Alternative::new(
                0,
                Some("oat spread".to_string()),
                Some("A"),
                CriterionVector::from_values([150.0, 3.0, 1.0, 0.02, 90.0, 8.0, 10.0, 0.0])
                    .unwrap(),
            ),
            Alternative::new(
                1,
                Some("cocoa spread".to_string()),
                Some("e"),
                CriterionVector::from_values([540.0, 56.0, 31.0, 0.04, 13.0, 3.5, 6.0, 2.0])
                    .unwrap(),
            ),
            Alternative::new(2, None, None, CriterionVector::zero()),
        ]
    }

    #[test]
    fn report_groups_results_by_threshold() {
        let model = nutrition_default().unwrap();
        let report = RunReport::build(&model, BatchRunner::run_grouped(&model, &dataset()));

        assert_eq!(report.thresholds.len(), 2);
        assert_eq!(report.alternative_count, 3);
        assert_eq!(report.graded_count, 2);
        assert_eq!(report.results().count(), 6);
        assert!(report.for_threshold(0.7).is_some());
        assert!(report.for_threshold(0.9).is_none());
    }

    #[test]
    fn report_summarizes_each_threshold() {
        let model = nutrition_default().unwrap();
        let report = RunReport::build(&model, BatchRunner::run_grouped(&model, &dataset()));

        let at_07 = report.for_threshold(0.7).unwrap();
        assert_eq!(at_07.distribution.pessimistic.total(), 3);
        assert_eq!(at_07.distribution.pessimistic.get(QualityClass::A), 1);
        // the cocoa spread is D' under the pessimistic rule, graded E
        let agreement = at_07.agreement.as_ref().unwrap();
        assert_eq!(agreement.compared, 2);
        assert_eq!(agreement.pessimistic.agreements, 1);
    }

    #[test]
    fn report_echoes_model() {
        let model = nutrition_default().unwrap();
        let report = RunReport::build(&model, BatchRunner::run_grouped(&model, &dataset()));
        assert_eq!(report.model, ModelDefinition::from_model(&model));
        assert_eq!(report.model.profiles.len(), 6);
    }

    #[test]
    fn report_serializes_to_json() {
        let model = nutrition_default().unwrap();
        let report = RunReport::build(&model, BatchRunner::run_grouped(&model, &dataset()));
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["run_id"].is_string());
        assert_eq!(json["thresholds"][0]["threshold"], 0.6);
        assert_eq!(json["thresholds"][0]["results"][2]["name"], "product_2");
        assert_eq!(json["thresholds"][0]["results"][2]["reference_label"], "N/A");
    }
}
