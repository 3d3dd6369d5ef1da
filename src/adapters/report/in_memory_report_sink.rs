//! In-Memory Report Sink
//!
//! Keeps every written report. Useful for testing and embedding.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::RunReport;
use crate::ports::{ReportSink, SinkError};

/// In-memory report store
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportSink {
    reports: Arc<RwLock<Vec<RunReport>>>,
}

impl InMemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored reports
    pub async fn count(&self) -> usize {
        self.reports.read().await.len()
    }

    /// Most recently written report
    pub async fn last(&self) -> Option<RunReport> {
        self.reports.read().await.last().cloned()
    }

    /// Clear all stored reports
    pub async fn clear(&self) {
        self.reports.write().await.clear();
    }
}

#[async_trait]
impl ReportSink for InMemoryReportSink {
    async fn write_report(&self, report: &RunReport) -> Result<(), SinkError> {
        self.reports.write().await.push(report.clone());
        Ok(())
    }
}
