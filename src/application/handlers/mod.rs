//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod classify_dataset;

pub use classify_dataset::{ClassifyDatasetCommand, ClassifyDatasetHandler};
