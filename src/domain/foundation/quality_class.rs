//! Quality class value object (A' best to E' worst).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::ValidationError;

/// One of the five ordered classes delimited by the boundary profiles.
///
/// Ordering follows quality: `A' > B' > C' > D' > E'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum QualityClass {
    #[serde(rename = "A'")]
    A = 1,
    #[serde(rename = "B'")]
    B = 2,
    #[serde(rename = "C'")]
    C = 3,
    #[serde(rename = "D'")]
    D = 4,
    #[serde(rename = "E'")]
    E = 5,
}

impl QualityClass {
    /// All classes, best first.
    pub const ALL: [QualityClass; 5] = [
        QualityClass::A,
        QualityClass::B,
        QualityClass::C,
        QualityClass::D,
        QualityClass::E,
    ];

    pub const BEST: QualityClass = QualityClass::A;
    pub const WORST: QualityClass = QualityClass::E;

    /// Creates a class from its rank (1 = best, 5 = worst).
    pub fn try_from_rank(rank: u8) -> Result<Self, ValidationError> {
        match rank {
            1 => Ok(QualityClass::A),
            2 => Ok(QualityClass::B),
            3 => Ok(QualityClass::C),
            4 => Ok(QualityClass::D),
            5 => Ok(QualityClass::E),
            _ => Err(ValidationError::out_of_range(
                "class rank",
                "1..=5",
                f64::from(rank),
            )),
        }
    }

    /// Rank in the total order, 1 = best.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Position in [`QualityClass::ALL`].
    pub fn index(&self) -> usize {
        usize::from(self.rank() - 1)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            QualityClass::A => "A'",
            QualityClass::B => "B'",
            QualityClass::C => "C'",
            QualityClass::D => "D'",
            QualityClass::E => "E'",
        }
    }
}

impl Ord for QualityClass {
    fn cmp(&self, other: &Self) -> Ordering {
        // lower rank is better
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for QualityClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QualityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
