//! Readability heuristic separating text from incidental printable noise.
//!
//! Binary noise that happens to be printable tends to repeat one byte or
//! alternate with long punctuation stretches. Long strings must also be
//! mostly alphanumeric and contain at least one letter, which screens out
//! hex-dump-like or encoded blobs.

use serde::{Deserialize, Serialize};

/// Tunable limits for [`is_readable_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadabilityThresholds {
    /// Longest allowed run of one repeated character
    pub max_repeat_run: usize,
    /// Longest allowed run of consecutive non-alphanumeric characters
    pub max_non_alnum_run: usize,
    /// Length (in characters) from which the ratio/letter check applies
    pub long_string_len: usize,
    /// Minimum alphanumeric ratio for long strings
    pub min_alnum_ratio_long: f64,
}

impl Default for ReadabilityThresholds {
    fn default() -> Self {
        Self {
            max_repeat_run: 10,
            max_non_alnum_run: 15,
            long_string_len: 20,
            min_alnum_ratio_long: 0.5,
        }
    }
}

/// Check a string against the default thresholds.
pub fn is_potentially_readable(text: &str) -> bool {
    is_readable_with(text, &ReadabilityThresholds::default())
}

/// Single-pass readability check. The empty string passes vacuously.
pub fn is_readable_with(text: &str, t: &ReadabilityThresholds) -> bool {
    let mut len = 0usize;
    let mut alnum_count = 0usize;
    let mut has_letter = false;

    let mut prev: Option<char> = None;
    let mut repeat_run = 0usize;
    let mut max_repeat_run = 0usize;
    let mut non_alnum_run = 0usize;
    let mut max_non_alnum_run = 0usize;

    for c in text.chars() {
        len += 1;
        let is_letter = c.is_ascii_alphabetic();
        let is_alnum = c.is_ascii_alphanumeric();
        has_letter |= is_letter;
        if is_alnum {
            alnum_count += 1;
        }

        repeat_run = if prev == Some(c) { repeat_run + 1 } else { 1 };
        prev = Some(c);
        max_repeat_run = max_repeat_run.max(repeat_run);

        non_alnum_run = if is_alnum { 0 } else { non_alnum_run + 1 };
        max_non_alnum_run = max_non_alnum_run.max(non_alnum_run);
    }

    if max_repeat_run > t.max_repeat_run || max_non_alnum_run > t.max_non_alnum_run {
        return false;
    }

    if len >= t.long_string_len {
        let ratio = alnum_count as f64 / len as f64;
        if ratio < t.min_alnum_ratio_long || !has_letter {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_text_passes() {
        assert!(is_potentially_readable("kernel32.dll"));
        assert!(is_potentially_readable("This program cannot be run in DOS mode."));
        assert!(is_potentially_readable(""));
    }

    #[test]
    fn repeat_run_limit() {
        // 10 repeats is the limit, 11 is rejected
        assert!(is_potentially_readable("AAAAAAAAAAx.dll"));
        assert!(!is_potentially_readable("AAAAAAAAAAAx.dll"));
        assert!(!is_potentially_readable("AAAAAAAAAAAAx.dll"));
    }

    #[test]
    fn non_alnum_run_limit() {
        let ok = format!("a{}b", "-.".repeat(7) + "-"); // 15 punctuation chars
        assert!(is_potentially_readable(&ok));
        let bad = format!("a{}b", "-.".repeat(8)); // 16 punctuation chars
        assert!(!is_potentially_readable(&bad));
    }

    #[test]
    fn long_string_ratio_and_letter_checks() {
        // 25 chars, 20 punctuation and 5 letters: ratio 0.2
        let s = "a-.-.b-.-.c-.-.d-.-.e-.-.";
        assert_eq!(s.len(), 25);
        assert!(!is_potentially_readable(s));

        // Digits only, long: alphanumeric but no letter
        assert!(!is_potentially_readable("12345678901234567890"));

        // Same shape under 20 chars skips the ratio check
        assert!(is_potentially_readable("a-.-.b-.-.c-.-."));
        assert!(is_potentially_readable("1234567890123456789"));
    }

    #[test]
    fn custom_thresholds() {
        let strict = ReadabilityThresholds {
            max_repeat_run: 2,
            ..ReadabilityThresholds::default()
        };
        assert!(!is_readable_with("aaa.dll", &strict));
        assert!(is_readable_with("aa.dll", &strict));
    }
}
