//! End-to-end analysis pipeline: extract, filter, classify.
//!
//! A single run is synchronous and owns nothing but its input slice, so
//! independent files can be analyzed in parallel without coordination.

use crate::config::AnalyzerConfig;
use crate::dll::{classify_dlls, filter_dll_names, DllRules};
use crate::error::{AnalysisError, Result};
use crate::hashing::sha256_digest;
use crate::io::{read_file, read_file_async};
use crate::progress::{emit, AnalysisStage, NoProgress, ProgressSink};
use crate::report::FileReport;
use crate::strings::{extract_strings, StringsConfig};
use crate::timeout::{with_timeout, TimeoutConfig};
use crate::types::AnalysisResult;
use rayon::prelude::*;
use std::path::Path;
use tracing::info;

/// Analyze a buffer with the built-in rules and the given minimum run length.
pub fn analyze(buffer: &[u8], min_length: usize) -> Result<AnalysisResult> {
    Analyzer::with_min_length(min_length).analyze(buffer)
}

/// Configured analysis pipeline. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    rules: DllRules,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            rules: DllRules::default(),
        }
    }
}

impl Analyzer {
    /// Validate the configuration and compile its rule table.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let rules = DllRules::from_config(&config.rules)?;
        Ok(Self { config, rules })
    }

    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            config: AnalyzerConfig {
                strings: StringsConfig::with_min_length(min_length),
                ..AnalyzerConfig::default()
            },
            rules: DllRules::default(),
        }
    }

    pub fn analyze(&self, data: &[u8]) -> Result<AnalysisResult> {
        self.analyze_with_progress(data, &mut NoProgress)
    }

    /// Run the pipeline, reporting each stage to `progress`.
    pub fn analyze_with_progress<P: ProgressSink + ?Sized>(
        &self,
        data: &[u8],
        progress: &mut P,
    ) -> Result<AnalysisResult> {
        let span = crate::span_trace!("analyze", bytes = data.len());
        let _guard = span.enter();

        if data.is_empty() {
            let err = AnalysisError::EmptyInput;
            emit(progress, AnalysisStage::Failed, format!("Error: {}", err));
            return Err(err);
        }

        emit(
            progress,
            AnalysisStage::Extracting,
            "Extracting and filtering strings...",
        );
        let readable = extract_strings(data, &self.config.strings);
        let dll_names = filter_dll_names(readable.iter().map(|s| s.text.as_str()));

        if dll_names.is_empty() {
            emit(
                progress,
                AnalysisStage::Failed,
                "No potential DLL names found in the file's strings.",
            );
            return Err(AnalysisError::NoCandidates);
        }

        emit(
            progress,
            AnalysisStage::Classifying,
            format!("Found {} potential DLL(s). Analyzing...", dll_names.len()),
        );
        let result = classify_dlls(&dll_names, &self.rules).into_result();

        info!(
            readable = readable.len(),
            candidates = dll_names.len(),
            suspicious = result.potentially_suspicious_dlls.len(),
            "analysis complete"
        );
        emit(progress, AnalysisStage::Complete, "Analysis complete.");
        Ok(result)
    }

    pub fn analyze_path<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisResult> {
        self.analyze_path_with_progress(path, &mut NoProgress)
    }

    pub fn analyze_path_with_progress<P, S>(&self, path: P, progress: &mut S) -> Result<AnalysisResult>
    where
        P: AsRef<Path>,
        S: ProgressSink + ?Sized,
    {
        emit(progress, AnalysisStage::Reading, "Reading file...");
        let data = match read_file(path, &self.config.io) {
            Ok(d) => d,
            Err(e) => {
                emit(progress, AnalysisStage::Failed, format!("Error: {}", e));
                return Err(e);
            }
        };
        self.analyze_with_progress(&data, progress)
    }

    /// Read the file asynchronously, then analyze it, all under `timeout`.
    pub async fn analyze_path_async<P: AsRef<Path>>(
        &self,
        path: P,
        timeout: TimeoutConfig,
    ) -> Result<AnalysisResult> {
        let path = path.as_ref();
        with_timeout(timeout, async {
            let data = read_file_async(path, &self.config.io).await?;
            self.analyze(&data)
        })
        .await
    }

    /// Analyze one file into a report carrying its size and digest.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> FileReport {
        let path = path.as_ref();
        let data = match read_file(path, &self.config.io) {
            Ok(d) => d,
            Err(e) => return FileReport::failed(path.to_path_buf(), e),
        };
        let (result, error) = match self.analyze(&data) {
            Ok(r) => (Some(r), None),
            Err(e) => (None, Some(e.to_string())),
        };
        FileReport {
            path: path.to_path_buf(),
            size_bytes: Some(data.len() as u64),
            sha256: Some(sha256_digest(&data)),
            result,
            error,
        }
    }

    /// Analyze files in parallel; reports come back in input order.
    pub fn analyze_files<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<FileReport> {
        paths.par_iter().map(|p| self.analyze_file(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::AnalysisStatus;

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(analyze(b"", 5), Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn progress_stages_are_ordered() {
        let data = b"\x00MZ\x00\x00hookapi.dll\x00user32.dll\x00";
        let mut seen: Vec<AnalysisStatus> = Vec::new();
        let result = Analyzer::default()
            .analyze_with_progress(data, &mut |s: AnalysisStatus| seen.push(s))
            .unwrap();
        assert_eq!(result.potentially_suspicious_dlls, vec!["hookapi.dll"]);

        let stages: Vec<AnalysisStage> = seen.iter().map(|s| s.stage).collect();
        assert_eq!(
            stages,
            vec![
                AnalysisStage::Extracting,
                AnalysisStage::Classifying,
                AnalysisStage::Complete
            ]
        );
        assert_eq!(seen[1].message, "Found 2 potential DLL(s). Analyzing...");
    }

    #[test]
    fn failure_reports_failed_stage() {
        let mut last = None;
        let err = Analyzer::default()
            .analyze_with_progress(b"notadll.txt", &mut |s: AnalysisStatus| last = Some(s.stage))
            .unwrap_err();
        assert!(err.is_no_candidates());
        assert_eq!(last, Some(AnalysisStage::Failed));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = AnalyzerConfig::default();
        cfg.strings.min_length = 0;
        assert!(matches!(
            Analyzer::new(cfg),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }
}
