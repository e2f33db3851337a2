//! Shared test utilities for building synthetic executables and temp files.
#![allow(dead_code)]

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// Minimal DOS header prefix followed by binary filler, so buffers look like
/// real PE images to the scanner (short printable runs, long zero runs).
pub fn pe_prelude() -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"MZ\x90\x00\x03\x00\x00\x00\x04\x00\x00\x00\xff\xff\x00\x00");
    out.extend_from_slice(&[0u8; 48]);
    out.extend_from_slice(b"\x0e\x1f\xba\x0e\x00\xb4\x09\xcd\x21\xb8\x01\x4c\xcd\x21");
    out.extend_from_slice(b"This program cannot be run in DOS mode.\r\r\n$\x00\x00");
    out.extend_from_slice(&[0u8; 32]);
    out
}

/// Build a PE-like buffer embedding each string NUL-terminated, separated
/// by non-printable filler.
pub fn synthetic_pe(strings: &[&str]) -> Vec<u8> {
    let mut out = pe_prelude();
    for (i, s) in strings.iter().enumerate() {
        out.extend_from_slice(s.as_bytes());
        out.push(0);
        out.extend_from_slice(&[0x90, 0xc3, (i as u8) | 0x80, 0x00]);
    }
    out
}

/// Creates a temporary file with the given suffix and content.
pub fn create_temp_file(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut temp_file = Builder::new().suffix(suffix).tempfile().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
