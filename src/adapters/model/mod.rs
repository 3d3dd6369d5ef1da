//! Model Adapters
//!
//! Implementations of the ModelSource port.
//!
//! - **BuiltinModelSource** - The built-in nutrition model
//! - **FileModelSource** - YAML or JSON definition on disk
//! - **InMemoryModelSource** - A definition held in memory (testing)

mod builtin_model_source;
mod file_model_source;

pub use builtin_model_source::{BuiltinModelSource, InMemoryModelSource};
pub use file_model_source::FileModelSource;
