//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the classification domain.

mod errors;
mod ids;
mod quality_class;
mod reference_label;
mod threshold;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::RunId;
pub use quality_class::QualityClass;
pub use reference_label::ReferenceLabel;
pub use threshold::Threshold;
