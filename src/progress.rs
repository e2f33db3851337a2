//! Optional status notifications emitted while an analysis runs.
//!
//! Progress is observational only: sinks receive ordered stage updates but
//! cannot influence the result.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStage {
    Reading,
    Extracting,
    Classifying,
    Complete,
    Failed,
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisStage::Reading => "reading",
            AnalysisStage::Extracting => "extracting",
            AnalysisStage::Classifying => "classifying",
            AnalysisStage::Complete => "complete",
            AnalysisStage::Failed => "failed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisStatus {
    pub stage: AnalysisStage,
    pub message: String,
}

/// Receiver for [`AnalysisStatus`] updates.
pub trait ProgressSink {
    fn report(&mut self, status: AnalysisStatus);
}

impl<F> ProgressSink for F
where
    F: FnMut(AnalysisStatus),
{
    fn report(&mut self, status: AnalysisStatus) {
        self(status)
    }
}

/// Sink that drops every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _status: AnalysisStatus) {}
}

/// Mirror a status update to tracing, then hand it to the sink.
pub(crate) fn emit<P: ProgressSink + ?Sized>(
    sink: &mut P,
    stage: AnalysisStage,
    message: impl Into<String>,
) {
    let message = message.into();
    tracing::debug!(stage = %stage, "{}", message);
    sink.report(AnalysisStatus { stage, message });
}
