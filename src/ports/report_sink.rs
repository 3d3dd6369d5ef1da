//! Report Sink Port - Interface for exporting run reports.

use async_trait::async_trait;

use crate::domain::analysis::RunReport;

/// Errors that can occur while writing a report
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to serialize report: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting a finished run
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Write the report
    ///
    /// # Errors
    /// Returns `SinkError` if serialization or the write fails
    async fn write_report(&self, report: &RunReport) -> Result<(), SinkError>;
}
