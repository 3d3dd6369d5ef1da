//! Agreement Analyzer - compares assigned classes with reference grades.

use serde::Serialize;

use super::distribution::percent;
use crate::domain::foundation::{QualityClass, Threshold};
use crate::domain::outranking::{AssignmentRule, ThresholdRun};

/// Reference class (rows) against assigned class (columns).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    cells: [[usize; 5]; 5],
}

impl ConfusionMatrix {
    pub fn record(&mut self, reference: QualityClass, assigned: QualityClass) {
        self.cells[reference.index()][assigned.index()] += 1;
    }

    pub fn get(&self, reference: QualityClass, assigned: QualityClass) -> usize {
        self.cells[reference.index()][assigned.index()]
    }

    pub fn row_total(&self, reference: QualityClass) -> usize {
        self.cells[reference.index()].iter().sum()
    }

    pub fn column_total(&self, assigned: QualityClass) -> usize {
        self.cells.iter().map(|row| row[assigned.index()]).sum()
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Count on the diagonal.
    pub fn agreements(&self) -> usize {
        QualityClass::ALL.iter().map(|c| self.get(*c, *c)).sum()
    }
}

/// Row-major view used for serialization.
#[derive(Serialize)]
struct ConfusionMatrixView {
    labels: Vec<&'static str>,
    cells: [[usize; 5]; 5],
    row_totals: Vec<usize>,
    column_totals: Vec<usize>,
    total: usize,
}

impl Serialize for ConfusionMatrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ConfusionMatrixView {
            labels: QualityClass::ALL.iter().map(|c| c.label()).collect(),
            cells: self.cells,
            row_totals: QualityClass::ALL.iter().map(|c| self.row_total(*c)).collect(),
            column_totals: QualityClass::ALL.iter().map(|c| self.column_total(*c)).collect(),
            total: self.total(),
        }
        .serialize(serializer)
    }
}

/// Agreement figures for one assignment rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleAgreement {
    pub rule: AssignmentRule,
    pub agreements: usize,
    pub disagreements: usize,
    /// Percent, one decimal.
    pub agreement_rate: f64,
    pub confusion: ConfusionMatrix,
}

/// Agreement of both rules with the reference grades at one threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgreementStats {
    pub threshold: Threshold,
    /// Results that carried a usable reference grade.
    pub compared: usize,
    pub pessimistic: RuleAgreement,
    pub optimistic: RuleAgreement,
}

impl AgreementStats {
    pub fn for_rule(&self, rule: AssignmentRule) -> &RuleAgreement {
        match rule {
            AssignmentRule::Pessimistic => &self.pessimistic,
            AssignmentRule::Optimistic => &self.optimistic,
        }
    }
}

/// Reference-comparison functions.
pub struct AgreementAnalyzer;

impl AgreementAnalyzer {
    /// Compares a threshold run against the reference grades.
    ///
    /// # Edge Cases
    /// - Results with an unavailable grade are skipped
    /// - No graded results: returns None
    pub fn compare(run: &ThresholdRun) -> Option<AgreementStats> {
        let graded: Vec<_> = run
            .results
            .iter()
            .filter_map(|r| r.reference_label.expected_class().map(|expected| (expected, r)))
            .collect();

        if graded.is_empty() {
            return None;
        }

        let rule_agreement = |rule: AssignmentRule| {
            let mut confusion = ConfusionMatrix::default();
            for (expected, result) in &graded {
                confusion.record(*expected, result.class_for(rule));
            }
            let agreements = confusion.agreements();
            RuleAgreement {
                rule,
                agreements,
                disagreements: graded.len() - agreements,
                agreement_rate: percent(agreements, graded.len()),
                confusion,
            }
        };

        Some(AgreementStats {
            threshold: run.threshold,
            compared: graded.len(),
            pessimistic: rule_agreement(AssignmentRule::Pessimistic),
            optimistic: rule_agreement(AssignmentRule::Optimistic),
        })
    }
}
