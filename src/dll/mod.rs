//! DLL-name candidate filtering and suspicion classification.

pub mod candidates;
pub mod classify;
pub mod rules;

pub use candidates::{filter_dll_names, is_dll_name};
pub use classify::{classify_dlls, Classification, CLEAN_SUMMARY};
pub use rules::{DllRules, PatternRule};
