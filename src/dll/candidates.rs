//! DLL-name filtering over readable strings.

use std::collections::HashSet;

/// Characters that cannot appear in a Windows file name.
pub const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

fn has_dll_suffix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 4 && b[b.len() - 4..].eq_ignore_ascii_case(b".dll")
}

/// Whether an already-trimmed string looks like a bare DLL file name.
pub fn is_dll_name(s: &str) -> bool {
    s.chars().count() > 4 && has_dll_suffix(s) && !s.contains(INVALID_FILENAME_CHARS)
}

/// Trim and filter strings down to distinct DLL names.
///
/// Duplicates collapse by exact value; output keeps first-appearance order.
pub fn filter_dll_names<'a, I>(strings: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for s in strings {
        let name = s.trim();
        if is_dll_name(name) && seen.insert(name) {
            out.push(name.to_string());
        }
    }
    out
}
