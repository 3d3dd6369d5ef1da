//! Report Adapters
//!
//! Implementations of the ReportSink port.
//!
//! - **FileReportSink** - Pretty JSON or YAML file on disk
//! - **InMemoryReportSink** - Keeps reports in memory (testing/embedding)

mod file_report_sink;
mod in_memory_report_sink;

pub use file_report_sink::{FileReportSink, ReportFormat};
pub use in_memory_report_sink::InMemoryReportSink;
