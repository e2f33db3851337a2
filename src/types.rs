//! Result and verdict types shared by the classifier, analyzer and CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability category attached to a suspicious-name pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Compression,
    Cryptography,
    Injection,
    Hooking,
    Keylogging,
    #[serde(rename = "screen capture")]
    ScreenCapture,
    Networking,
    Encryption,
    Anonymization,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Compression => "compression",
            Category::Cryptography => "cryptography",
            Category::Injection => "injection",
            Category::Hooking => "hooking",
            Category::Keylogging => "keylogging",
            Category::ScreenCapture => "screen capture",
            Category::Networking => "networking",
            Category::Encryption => "encryption",
            Category::Anonymization => "anonymization",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a DLL name was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuspicionReason {
    /// Matched a suspicious-name pattern
    Pattern { category: Category },
    /// Name longer than the unusual-length limit
    UnusualLength { length: usize },
    /// Name contains a run of three or more digits
    DigitRun,
}

impl SuspicionReason {
    pub fn category(&self) -> Option<Category> {
        match self {
            SuspicionReason::Pattern { category } => Some(*category),
            _ => None,
        }
    }
}

/// A single flagged DLL name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DllFinding {
    pub name: String,
    pub reason: SuspicionReason,
}

/// Terminal artifact of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Suspicious names in first-detection order
    pub potentially_suspicious_dlls: Vec<String>,
    pub analysis_summary: String,
}

impl AnalysisResult {
    /// True when nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.potentially_suspicious_dlls.is_empty()
    }
}
