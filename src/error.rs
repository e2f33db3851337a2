//! Error types for the dllsift analyzer.
//!
//! Extraction and readability filtering never fail; errors only come from
//! the I/O boundary, configuration, or an input that holds nothing to
//! classify.

use thiserror::Error;

/// Main error type for dllsift operations.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No string in the input survived DLL-name filtering
    #[error("Could not find any strings ending in '.dll' to analyze")]
    NoCandidates,

    /// Zero-length input buffer
    #[error("Input is empty; nothing to analyze")]
    EmptyInput,

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File exceeds the configured size limit
    #[error("File too large: {size} bytes (limit: {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    /// Read stopped before the end of the file
    #[error("File could not be fully read: got {read} of {size} bytes")]
    IncompleteRead { read: u64, size: u64 },

    /// File name rejected by the extension allowlist
    #[error("Unsupported file extension: {0} (expected .exe or .dll)")]
    UnsupportedExtension(String),

    /// Analysis timeout
    #[error("Analysis timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// Configuration could not be parsed or failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A suspicious-name pattern failed to compile
    #[error("Invalid rule pattern '{pattern}': {message}")]
    InvalidRule { pattern: String, message: String },
}

impl AnalysisError {
    /// True for the "nothing to classify" outcome, as opposed to read or
    /// configuration failures.
    pub fn is_no_candidates(&self) -> bool {
        matches!(self, AnalysisError::NoCandidates)
    }
}

/// Result type alias for dllsift operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
