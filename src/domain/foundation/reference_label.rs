//! External reference grade attached to an alternative (Nutri-Score letter).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::QualityClass;

/// Reference grade supplied with the dataset, used only for comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceLabel {
    A,
    B,
    C,
    D,
    E,
    /// Missing or outside the valid letter set.
    #[default]
    #[serde(rename = "N/A")]
    Unavailable,
}

impl ReferenceLabel {
    /// Normalizes a raw grade: trimmed, case-insensitive, A-E only.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return ReferenceLabel::Unavailable;
        };
        match raw.trim().to_uppercase().as_str() {
            "A" => ReferenceLabel::A,
            "B" => ReferenceLabel::B,
            "C" => ReferenceLabel::C,
            "D" => ReferenceLabel::D,
            "E" => ReferenceLabel::E,
            _ => ReferenceLabel::Unavailable,
        }
    }

    /// The class this grade corresponds to, if any.
    pub fn expected_class(&self) -> Option<QualityClass> {
        match self {
            ReferenceLabel::A => Some(QualityClass::A),
            ReferenceLabel::B => Some(QualityClass::B),
            ReferenceLabel::C => Some(QualityClass::C),
            ReferenceLabel::D => Some(QualityClass::D),
            ReferenceLabel::E => Some(QualityClass::E),
            ReferenceLabel::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, ReferenceLabel::Unavailable)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceLabel::A => "A",
            ReferenceLabel::B => "B",
            ReferenceLabel::C => "C",
            ReferenceLabel::D => "D",
            ReferenceLabel::E => "E",
            ReferenceLabel::Unavailable => "N/A",
        }
    }
}

impl fmt::Display for ReferenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
