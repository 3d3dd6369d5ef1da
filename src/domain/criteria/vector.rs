//! Fixed-schema criterion vector used for alternatives and profiles.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::{Criterion, VectorError};

/// How keys that are not criteria are treated when building a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Skip them (dataset rows carry many unrelated columns).
    Ignore,
    /// Reject them (profiles must only talk about criteria).
    Reject,
}

/// One value per criterion. Criteria that were not supplied hold 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct CriterionVector([f64; Criterion::COUNT]);

impl CriterionVector {
    /// All criteria at 0.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a vector from values given in [`Criterion::ALL`] order.
    ///
    /// # Errors
    /// Rejects NaN and infinities.
    pub fn from_values(values: [f64; Criterion::COUNT]) -> Result<Self, VectorError> {
        for criterion in Criterion::ALL {
            let value = values[criterion.index()];
            if !value.is_finite() {
                return Err(VectorError::NonFinite { criterion, value });
            }
        }
        Ok(Self(values))
    }

    /// Builds a vector from key/value pairs, defaulting absent criteria to 0.
    ///
    /// This is the single place where the "not supplied means 0" rule is
    /// applied; everything downstream sees a complete vector.
    pub fn from_entries<'a, I>(entries: I, unknown: UnknownKeys) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut values = [0.0; Criterion::COUNT];
        for (key, value) in entries {
            match Criterion::from_key(key) {
                Some(criterion) => {
                    if !value.is_finite() {
                        return Err(VectorError::NonFinite { criterion, value });
                    }
                    values[criterion.index()] = value;
                }
                None if unknown == UnknownKeys::Reject => {
                    return Err(VectorError::UnknownCriterion(key.to_string()));
                }
                None => {}
            }
        }
        Ok(Self(values))
    }

    /// Returns the value for a criterion.
    pub fn get(&self, criterion: Criterion) -> f64 {
        self.0[criterion.index()]
    }

    /// Returns a copy with one criterion replaced.
    pub fn with(mut self, criterion: Criterion, value: f64) -> Result<Self, VectorError> {
        if !value.is_finite() {
            return Err(VectorError::NonFinite { criterion, value });
        }
        self.0[criterion.index()] = value;
        Ok(self)
    }

    /// Iterates values in criterion order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Key/value view, in criterion order.
    pub fn to_entries(&self) -> Vec<(&'static str, f64)> {
        self.iter().map(|(c, v)| (c.key(), v)).collect()
    }
}

impl TryFrom<BTreeMap<String, f64>> for CriterionVector {
    type Error = VectorError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_entries(map.iter().map(|(k, v)| (k.as_str(), *v)), UnknownKeys::Reject)
    }
}

impl Serialize for CriterionVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Criterion::COUNT))?;
        for (criterion, value) in self.iter() {
            map.serialize_entry(criterion.key(), &value)?;
        }
        map.end()
    }
}
