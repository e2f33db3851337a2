//! Configuration for the analysis pipeline.
//!
//! Every section has defaults matching the built-in behavior, so a JSON
//! file only needs to name the fields it overrides.

use crate::error::{AnalysisError, Result};
use crate::io::IOLimits;
use crate::strings::StringsConfig;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Master configuration for the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// String extraction and readability settings.
    pub strings: StringsConfig,
    /// File reading limits.
    pub io: IOLimits,
    /// Additions to the built-in DLL rule tables.
    pub rules: RulesConfig,
}

/// User additions to the allow-list and pattern table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Extra names never flagged (compared case-insensitively)
    pub extra_allowed: Vec<String>,
    /// Extra patterns, evaluated after the built-in ones
    pub extra_patterns: Vec<PatternRuleConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRuleConfig {
    /// Literal text matched (any case) anywhere before a trailing `.dll`
    pub keyword: String,
    pub category: Category,
}

impl AnalyzerConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: AnalyzerConfig =
            serde_json::from_str(text).map_err(|e| AnalysisError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading configuration from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.strings.min_length == 0 {
            return Err(AnalysisError::InvalidConfig(
                "strings.min_length must be at least 1".to_string(),
            ));
        }
        let ratio = self.strings.readability.min_alnum_ratio_long;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(AnalysisError::InvalidConfig(format!(
                "strings.readability.min_alnum_ratio_long must be within [0, 1], got {}",
                ratio
            )));
        }
        if self.io.max_read_bytes == 0 {
            return Err(AnalysisError::InvalidConfig(
                "io.max_read_bytes must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = AnalyzerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.strings.min_length, 5);
        assert!(cfg.rules.extra_patterns.is_empty());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = AnalyzerConfig::from_json_str(
            r#"{
                "strings": { "min_length": 6 },
                "rules": {
                    "extra_patterns": [ { "keyword": "spy", "category": "screen capture" } ]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.strings.min_length, 6);
        assert_eq!(cfg.strings.readability.max_repeat_run, 10);
        assert_eq!(cfg.io, IOLimits::default());
        assert_eq!(cfg.rules.extra_patterns[0].category, Category::ScreenCapture);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AnalyzerConfig::from_json_str(r#"{ "strings": { "min_length": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfig(_)));

        let err = AnalyzerConfig::from_json_str(
            r#"{ "strings": { "readability": { "min_alnum_ratio_long": 1.5 } } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("min_alnum_ratio_long"));

        let err = AnalyzerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfig(_)));
    }

    #[test]
    fn extra_patterns_take_keyword_field() {
        let cfg = AnalyzerConfig::from_json_str(
            r#"{"rules":{"extra_patterns":[{"keyword":"spy","category":"hooking"}]}}"#,
        )
        .unwrap();
        assert_eq!(
            cfg.rules.extra_patterns,
            vec![PatternRuleConfig {
                keyword: "spy".to_string(),
                category: Category::Hooking,
            }]
        );

        let err = AnalyzerConfig::from_json_str(
            r#"{"rules":{"extra_patterns":[{"category":"hooking"}]}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("keyword"));
    }

    #[test]
    fn json_roundtrip_of_defaults() {
        let cfg = AnalyzerConfig::default();
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(AnalyzerConfig::from_json_str(&text).unwrap(), cfg);
    }
}
