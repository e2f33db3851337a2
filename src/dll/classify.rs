//! Suspicion classification and summary generation for DLL names.

use super::rules::{unusual_name_reason, DllRules};
use crate::types::{AnalysisResult, Category, DllFinding, SuspicionReason};
use std::collections::HashSet;
use tracing::trace;

pub const CLEAN_SUMMARY: &str =
    "No suspicious DLLs were identified. The executable appears to use standard system libraries.";

/// Stand-in for the category list when only the naming heuristic fired.
const UNUSUAL_NAMING: &str = "unusual or randomized naming";

/// Findings for one set of DLL names, in first-detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub findings: Vec<DllFinding>,
}

impl Classification {
    pub fn suspicious_names(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.name.clone()).collect()
    }

    /// Pattern categories, deduplicated in first-trigger order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = HashSet::new();
        self.findings
            .iter()
            .filter_map(|f| f.reason.category())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn summary(&self) -> String {
        if self.findings.is_empty() {
            return CLEAN_SUMMARY.to_string();
        }
        let categories = self.categories();
        let category_list = if categories.is_empty() {
            UNUSUAL_NAMING.to_string()
        } else {
            categories
                .iter()
                .map(Category::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "The presence of {} potentially suspicious DLLs suggests capabilities related to {}, \
             which could be indicative of malware attempting to hide or transmit data.",
            self.findings.len(),
            category_list
        )
    }

    pub fn into_result(self) -> AnalysisResult {
        AnalysisResult {
            analysis_summary: self.summary(),
            potentially_suspicious_dlls: self.suspicious_names(),
        }
    }
}

/// Classify DLL names against the allow-list, the pattern table and the
/// naming heuristic. Each name is flagged at most once.
pub fn classify_dlls(names: &[String], rules: &DllRules) -> Classification {
    let mut findings = Vec::new();
    let mut flagged: HashSet<&str> = HashSet::new();

    for name in names {
        if rules.is_allowed(name) {
            trace!(dll = %name, "allow-listed");
            continue;
        }
        let reason = match rules.match_pattern(name) {
            Some(rule) => SuspicionReason::Pattern {
                category: rule.category(),
            },
            None => match unusual_name_reason(name) {
                Some(r) => r,
                None => continue,
            },
        };
        if flagged.insert(name.as_str()) {
            trace!(dll = %name, ?reason, "flagged");
            findings.push(DllFinding {
                name: name.clone(),
                reason,
            });
        }
    }

    Classification { findings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn system_dlls_are_skipped() {
        let c = classify_dlls(
            &names(&["KERNEL32.dll", "ntdll.dll", "WS2_32.DLL"]),
            &DllRules::default(),
        );
        assert!(c.findings.is_empty());
        assert_eq!(c.summary(), CLEAN_SUMMARY);
    }

    #[test]
    fn pattern_precedence_flags_once() {
        let c = classify_dlls(
            &names(&["cryptonet.dll", "cryptonet.dll"]),
            &DllRules::default(),
        );
        assert_eq!(c.suspicious_names(), vec!["cryptonet.dll"]);
        assert_eq!(c.categories(), vec![Category::Cryptography]);
    }

    #[test]
    fn heuristic_only_findings() {
        let c = classify_dlls(
            &names(&["abcdefghijkl.dll", "abcdefghijk.dll", "safe123.dll"]),
            &DllRules::default(),
        );
        assert_eq!(c.suspicious_names(), vec!["abcdefghijkl.dll", "safe123.dll"]);
        assert_eq!(
            c.findings[0].reason,
            SuspicionReason::UnusualLength { length: 16 }
        );
        assert_eq!(c.findings[1].reason, SuspicionReason::DigitRun);
        assert!(c.categories().is_empty());
        assert!(c.summary().contains("related to unusual or randomized naming,"));
    }

    #[test]
    fn summary_lists_distinct_categories_in_order() {
        let c = classify_dlls(
            &names(&[
                "user32.dll",
                "hookapi.dll",
                "winnet2.dll",
                "keyhook.dll",
                "x9981.dll",
            ]),
            &DllRules::default(),
        );
        assert_eq!(
            c.suspicious_names(),
            vec!["hookapi.dll", "winnet2.dll", "keyhook.dll", "x9981.dll"]
        );
        let result = c.into_result();
        assert_eq!(
            result.analysis_summary,
            "The presence of 4 potentially suspicious DLLs suggests capabilities related to \
             hooking, networking, which could be indicative of malware attempting to hide or \
             transmit data."
        );
    }
}
