//! The fixed criterion set and per-criterion direction/weight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the nutrition criteria a product is judged on.
///
/// Declaration order is the canonical iteration order: concordance sums
/// weights in this order and vectors store values at [`Criterion::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criterion {
    #[serde(rename = "energy-kcal_100g")]
    Energy,
    #[serde(rename = "sugars_100g")]
    Sugars,
    #[serde(rename = "fat_100g")]
    Fat,
    #[serde(rename = "sodium_100g")]
    Sodium,
    #[serde(rename = "fruits_vegetables_nuts_100g")]
    FruitsVegetablesNuts,
    #[serde(rename = "fiber_100g")]
    Fiber,
    #[serde(rename = "proteins_100g")]
    Proteins,
    #[serde(rename = "additives_n")]
    Additives,
}

impl Criterion {
    pub const COUNT: usize = 8;

    pub const ALL: [Criterion; Criterion::COUNT] = [
        Criterion::Energy,
        Criterion::Sugars,
        Criterion::Fat,
        Criterion::Sodium,
        Criterion::FruitsVegetablesNuts,
        Criterion::Fiber,
        Criterion::Proteins,
        Criterion::Additives,
    ];

    /// External column key, as found in datasets and model files.
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::Energy => "energy-kcal_100g",
            Criterion::Sugars => "sugars_100g",
            Criterion::Fat => "fat_100g",
            Criterion::Sodium => "sodium_100g",
            Criterion::FruitsVegetablesNuts => "fruits_vegetables_nuts_100g",
            Criterion::Fiber => "fiber_100g",
            Criterion::Proteins => "proteins_100g",
            Criterion::Additives => "additives_n",
        }
    }

    /// Looks a criterion up by its external key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Slot of this criterion in a vector.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Criterion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
            .ok_or_else(|| ValidationError::invalid_format("criterion", format!("unknown key '{}'", s)))
    }
}

/// Whether more or less of a criterion is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher is better (fiber, proteins, ...).
    Benefit,
    /// Lower is better (sugars, sodium, ...).
    Cost,
}

impl Direction {
    /// The per-criterion "subject is at least as good as reference" test.
    pub fn is_at_least_as_good(&self, subject: f64, reference: f64) -> bool {
        match self {
            Direction::Benefit => subject >= reference,
            Direction::Cost => subject <= reference,
        }
    }
}

/// Direction and weight of one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub criterion: Criterion,
    pub direction: Direction,
    pub weight: f64,
}

impl CriterionSpec {
    pub fn new(criterion: Criterion, direction: Direction, weight: f64) -> Self {
        Self {
            criterion,
            direction,
            weight,
        }
    }

    pub fn benefit(criterion: Criterion, weight: f64) -> Self {
        Self::new(criterion, Direction::Benefit, weight)
    }

    pub fn cost(criterion: Criterion, weight: f64) -> Self {
        Self::new(criterion, Direction::Cost, weight)
    }
}
