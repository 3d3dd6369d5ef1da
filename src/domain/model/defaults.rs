//! Built-in nutrition model, calibrated on spreads data.

use std::collections::BTreeMap;

use super::{default_thresholds, ClassificationModel, CriterionDefinition, ModelDefinition};
use crate::domain::criteria::{Criterion, Direction, ModelError};

/// (criterion, direction, weight). Cost weights total 0.54, benefit 0.46.
const CRITERIA: [(Criterion, Direction, f64); Criterion::COUNT] = [
    (Criterion::Energy, Direction::Cost, 0.12),
    (Criterion::Sugars, Direction::Cost, 0.12),
    (Criterion::Fat, Direction::Cost, 0.12),
    (Criterion::Sodium, Direction::Cost, 0.08),
    (Criterion::FruitsVegetablesNuts, Direction::Benefit, 0.18),
    (Criterion::Fiber, Direction::Benefit, 0.15),
    (Criterion::Proteins, Direction::Benefit, 0.13),
    (Criterion::Additives, Direction::Cost, 0.10),
];

/// b1..b6, values in [`Criterion::ALL`] order.
const PROFILES: [[f64; Criterion::COUNT]; 6] = [
    // b1: lower sentinel, worse than any real product
    [1000.0, 101.0, 101.0, 100.0, -1.0, -1.0, -1.0, 50.0],
    // b2: E'/D'
    [600.0, 35.0, 20.0, 1.5, 0.0, 1.0, 2.0, 6.0],
    // b3: D'/C'
    [480.0, 20.0, 10.0, 0.5, 10.0, 2.5, 4.0, 4.0],
    // b4: C'/B'
    [350.0, 10.0, 5.0, 0.2, 40.0, 4.0, 6.0, 2.0],
    // b5: B'/A'
    [200.0, 5.0, 2.0, 0.05, 80.0, 7.0, 9.0, 0.0],
    // b6: upper sentinel, unreachable
    [-1.0, -1.0, -1.0, -1.0, 101.0, 101.0, 101.0, -1.0],
];

/// The default model as plain data.
pub fn nutrition_definition() -> ModelDefinition {
    ModelDefinition {
        criteria: CRITERIA
            .iter()
            .map(|(criterion, direction, weight)| CriterionDefinition {
                criterion: criterion.key().to_string(),
                direction: *direction,
                weight: *weight,
            })
            .collect(),
        profiles: PROFILES
            .iter()
            .map(|values| {
                Criterion::ALL
                    .iter()
                    .map(|c| (c.key().to_string(), values[c.index()]))
                    .collect::<BTreeMap<_, _>>()
            })
            .collect(),
        thresholds: default_thresholds(),
    }
}

/// The default model, validated.
pub fn nutrition_default() -> Result<ClassificationModel, ModelError> {
    nutrition_definition().into_model()
}
