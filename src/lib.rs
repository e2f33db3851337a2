//! Static PE string extraction and suspicious-DLL heuristics.
//!
//! The input is treated as an opaque byte stream: printable runs are
//! extracted, noise is dropped by a readability heuristic, and the
//! remaining `.dll` names are scored against an allow-list and an ordered
//! pattern table.
//!
//! ```no_run
//! let data = std::fs::read("sample.exe").unwrap();
//! match dllsift::analyze(&data, dllsift::DEFAULT_MIN_LENGTH) {
//!     Ok(result) => println!("{}", result.analysis_summary),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

/// Analysis pipeline and entry points
pub mod analyzer;
/// Configuration loading and validation
pub mod config;
/// DLL-name filtering and classification
pub mod dll;
pub mod error;
pub mod hashing;
/// Bounded file reading
pub mod io;
pub mod logging;
pub mod progress;
pub mod report;
/// Printable-string extraction and readability filtering
pub mod strings;
pub mod timeout;
pub mod types;

pub use analyzer::{analyze, Analyzer};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, Result};
pub use progress::{AnalysisStage, AnalysisStatus, NoProgress, ProgressSink};
pub use report::FileReport;
pub use strings::DEFAULT_MIN_LENGTH;
pub use types::{AnalysisResult, Category, DllFinding, SuspicionReason};
