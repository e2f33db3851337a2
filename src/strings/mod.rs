//! String extraction for raw executable bytes.
//!
//! Extraction is two stages: a linear scan for printable runs, then a
//! readability filter that discards printable noise. Neither stage fails;
//! they only narrow the output, possibly to nothing.

mod config;
pub mod readability;
pub mod scan;

pub use config::{StringsConfig, DEFAULT_MIN_LENGTH};
pub use readability::{is_potentially_readable, is_readable_with, ReadabilityThresholds};
pub use scan::{extract_candidates, is_printable, scan_runs, CandidateRun, ExtractedString};

/// Extract readable strings from raw bytes using the provided configuration.
pub fn extract_strings(data: &[u8], cfg: &StringsConfig) -> Vec<ExtractedString> {
    let candidates = extract_candidates(data, cfg.min_length);
    let total = candidates.len();
    let readable: Vec<ExtractedString> = candidates
        .into_iter()
        .filter(|s| is_readable_with(&s.text, &cfg.readability))
        .collect();
    tracing::debug!(
        candidates = total,
        readable = readable.len(),
        min_length = cfg.min_length,
        "strings extracted"
    );
    readable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_strings_drops_noise_runs() {
        let mut data = Vec::new();
        data.extend_from_slice(b"\x00\x00advapi32.dll\x00");
        data.extend_from_slice(&[b'Z'; 40]);
        data.push(0);
        data.extend_from_slice(b"!!!!#$%^&*()_+=-[]{};:,.<>?\x00");
        data.extend_from_slice(b"GetProcAddress\x00");

        let out = extract_strings(&data, &StringsConfig::default());
        let texts: Vec<&str> = out.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["advapi32.dll", "GetProcAddress"]);
        assert_eq!(out[0].offset, 2);
    }
}
