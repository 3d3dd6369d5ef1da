//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `dataset` - Product datasets (JSON file, in-memory)
//! - `model` - Model definitions (built-in, YAML/JSON file, in-memory)
//! - `report` - Report export (JSON/YAML file, in-memory)

pub mod dataset;
pub mod model;
pub mod report;

pub use dataset::{InMemoryAlternativeSource, JsonFileAlternativeSource};
pub use model::{BuiltinModelSource, FileModelSource, InMemoryModelSource};
pub use report::{FileReportSink, InMemoryReportSink, ReportFormat};
