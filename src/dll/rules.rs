//! Allow-list and prioritized suspicious-name rule table.
use crate::config::RulesConfig;
use crate::error::{AnalysisError, Result};
use crate::types::{Category, SuspicionReason};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Common system libraries that are never flagged (lowercase).
pub const COMMON_SYSTEM_DLLS: &[&str] = &[
    "kernel32.dll",
    "user32.dll",
    "gdi32.dll",
    "ntdll.dll",
    "shell32.dll",
    "advapi32.dll",
    "ole32.dll",
    "msvcrt.dll",
    "comctl32.dll",
    "comdlg32.dll",
    "ws2_32.dll",
    "wininet.dll",
    "oleaut32.dll",
    "shlwapi.dll",
    "rpcrt4.dll",
];

/// Built-in patterns in evaluation order. First match wins, so `crypt`
/// shadows `net` for a name like `cryptonet.dll`.
pub const BUILTIN_PATTERNS: &[(&str, Category)] = &[
    ("7z", Category::Compression),
    ("rar", Category::Compression),
    ("crypt", Category::Cryptography),
    ("inject", Category::Injection),
    ("hook", Category::Hooking),
    ("keylog", Category::Keylogging),
    ("screen", Category::ScreenCapture),
    ("net", Category::Networking),
    ("ssl", Category::Encryption),
    ("tor", Category::Anonymization),
];

/// Names longer than this (in characters) are flagged as unusual.
pub const UNUSUAL_NAME_LENGTH: usize = 15;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{3,}").expect("digit run regex"));

static BUILTIN_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    BUILTIN_PATTERNS
        .iter()
        .map(|(p, c)| PatternRule::new(p, *c).expect("builtin pattern"))
        .collect()
});

/// One entry of the rule table: `<keyword>.*\.dll$`, case-insensitive,
/// matched anywhere in the name. The keyword is literal text.
#[derive(Debug, Clone)]
pub struct PatternRule {
    keyword: String,
    category: Category,
    regex: Regex,
}

impl PatternRule {
    pub fn new(keyword: &str, category: Category) -> Result<Self> {
        if keyword.trim().is_empty() {
            return Err(AnalysisError::InvalidRule {
                pattern: keyword.to_string(),
                message: "empty keyword would match every DLL".to_string(),
            });
        }
        let source = format!(r"(?i){}.*\.dll$", regex::escape(keyword));
        let regex = Regex::new(&source).map_err(|e| AnalysisError::InvalidRule {
            pattern: source.clone(),
            message: e.to_string(),
        })?;
        Ok(Self {
            keyword: keyword.to_string(),
            category,
            regex,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Allow-list plus ordered pattern rules used by the classifier.
#[derive(Debug, Clone)]
pub struct DllRules {
    allowed: HashSet<String>,
    patterns: Vec<PatternRule>,
}

impl Default for DllRules {
    fn default() -> Self {
        Self {
            allowed: COMMON_SYSTEM_DLLS.iter().map(|s| s.to_string()).collect(),
            patterns: BUILTIN_RULES.to_vec(),
        }
    }
}

impl DllRules {
    /// Built-in tables extended by user configuration. Extra patterns are
    /// evaluated after the built-in ones.
    pub fn from_config(cfg: &RulesConfig) -> Result<Self> {
        let mut rules = Self::default();
        for name in &cfg.extra_allowed {
            rules.allowed.insert(name.trim().to_ascii_lowercase());
        }
        for extra in &cfg.extra_patterns {
            rules
                .patterns
                .push(PatternRule::new(&extra.keyword, extra.category)?);
        }
        tracing::debug!(
            allowed = rules.allowed.len(),
            patterns = rules.patterns.len(),
            "dll rules loaded"
        );
        Ok(rules)
    }

    /// Exact, case-insensitive allow-list lookup.
    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed.contains(&name.to_ascii_lowercase())
    }

    /// First pattern rule matching `name`, in table order.
    pub fn match_pattern(&self, name: &str) -> Option<&PatternRule> {
        self.patterns.iter().find(|r| r.is_match(name))
    }

    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }
}

/// Fallback heuristic for packer-generated or randomized names.
pub fn unusual_name_reason(name: &str) -> Option<SuspicionReason> {
    let length = name.chars().count();
    if length > UNUSUAL_NAME_LENGTH {
        Some(SuspicionReason::UnusualLength { length })
    } else if DIGIT_RUN.is_match(name) {
        Some(SuspicionReason::DigitRun)
    } else {
        None
    }
}
