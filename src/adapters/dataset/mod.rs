//! Dataset Adapters
//!
//! Implementations of the AlternativeSource port.
//!
//! - **JsonFileAlternativeSource** - JSON array of product objects on disk
//! - **InMemoryAlternativeSource** - Fixed rows (testing/embedding)

mod in_memory_source;
mod json_file_source;

pub use in_memory_source::InMemoryAlternativeSource;
pub use json_file_source::{JsonFileAlternativeSource, DEFAULT_LABEL_FIELD, DEFAULT_NAME_FIELD};
