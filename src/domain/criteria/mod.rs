//! Criteria Module - the fixed criterion schema and the data built on it.
//!
//! # Components
//!
//! - `Criterion` / `Direction` / `CriterionSpec` - what is measured and which way is better
//! - `CriteriaModel` - validated weights and directions for every criterion
//! - `CriterionVector` - one value per criterion, defaulted at construction
//! - `ProfileSet` / `Boundary` - the six boundary profiles and the four tested ones

mod criterion;
mod error;
mod model;
mod profiles;
mod vector;

pub use criterion::{Criterion, CriterionSpec, Direction};
pub use error::{ModelError, VectorError};
pub use model::CriteriaModel;
pub use profiles::{Boundary, OrderingViolation, ProfileSet};
pub use vector::{CriterionVector, UnknownKeys};
