//! Per-file analysis reports.

use crate::types::AnalysisResult;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of analyzing one file: identity plus either a result or the
/// failure message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub size_bytes: Option<u64>,
    pub sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn failed(path: PathBuf, error: impl ToString) -> Self {
        Self {
            path,
            size_bytes: None,
            sha256: None,
            result: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }
}
