//! File-based Report Sink
//!
//! Writes the run report as pretty JSON or YAML.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::analysis::RunReport;
use crate::ports::{ReportSink, SinkError};

/// Serialization format of an exported report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn render(&self, report: &RunReport) -> Result<String, SinkError> {
        match self {
            ReportFormat::Json => serde_json::to_string_pretty(report)
                .map_err(|e| SinkError::SerializationFailed(e.to_string())),
            ReportFormat::Yaml => serde_yaml::to_string(report)
                .map_err(|e| SinkError::SerializationFailed(e.to_string())),
        }
    }
}

/// Writes reports to a single file, replacing previous content
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
    format: ReportFormat,
}

impl FileReportSink {
    pub fn new<P: AsRef<Path>>(path: P, format: ReportFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSink for FileReportSink {
    async fn write_report(&self, report: &RunReport) -> Result<(), SinkError> {
        let content = self.format.render(report)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SinkError::IoError(e.to_string()))?;
        }

        fs::write(&self.path, content)
            .await
            .map_err(|e| SinkError::IoError(e.to_string()))?;

        Ok(())
    }
}
