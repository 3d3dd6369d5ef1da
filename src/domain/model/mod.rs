//! Model Module - the explicit configuration value a run is computed from.
//!
//! - `ClassificationModel` - validated criteria, profiles and thresholds
//! - `ModelDefinition` - the same thing as plain serde data (files, audit echo)
//! - `nutrition_default` - the built-in nutrition model

mod classification_model;
mod defaults;
mod definition;

pub use classification_model::ClassificationModel;
pub use defaults::{nutrition_default, nutrition_definition};
pub(crate) use definition::default_thresholds;
pub use definition::{CriterionDefinition, ModelDefinition};
