//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AlternativeSource` - Loads the dataset rows to classify
//! - `ModelSource` - Loads the classification model definition
//! - `ReportSink` - Persists the finished run report

mod alternative_source;
mod model_source;
mod report_sink;

pub use alternative_source::{AlternativeSource, RawAlternative, SourceError};
pub use model_source::{ModelSource, ModelSourceError};
pub use report_sink::{ReportSink, SinkError};
