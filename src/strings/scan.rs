//! Printable-run scanner over raw bytes.
//!
//! The scanner is a two-state machine (`NoOpenRun` / `OpenRun(start)`)
//! driven by a single byte predicate. Runs shorter than the minimum length
//! are dropped here; whether the text is meaningful is decided later by
//! the readability filter.

use serde::{Deserialize, Serialize};

/// A contiguous printable byte range `[start, end)` within the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateRun {
    pub start: usize,
    pub end: usize,
}

impl CandidateRun {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Text decoded from a [`CandidateRun`], with the run's starting offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedString {
    pub text: String,
    pub offset: usize,
}

/// Printable ASCII (32..=126) plus tab, LF and CR.
#[inline]
pub fn is_printable(b: u8) -> bool {
    (32..=126).contains(&b) || matches!(b, b'\t' | b'\n' | b'\r')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    NoOpenRun,
    OpenRun(usize),
}

/// Find all printable runs of at least `min_length` bytes, in buffer order.
pub fn scan_runs(data: &[u8], min_length: usize) -> Vec<CandidateRun> {
    let mut runs = Vec::new();
    let mut state = RunState::NoOpenRun;

    for (i, &b) in data.iter().enumerate() {
        state = match (state, is_printable(b)) {
            (RunState::NoOpenRun, true) => RunState::OpenRun(i),
            (RunState::OpenRun(start), false) => {
                close_run(&mut runs, start, i, min_length);
                RunState::NoOpenRun
            }
            (unchanged, _) => unchanged,
        };
    }
    if let RunState::OpenRun(start) = state {
        close_run(&mut runs, start, data.len(), min_length);
    }

    runs
}

fn close_run(runs: &mut Vec<CandidateRun>, start: usize, end: usize, min_length: usize) {
    if end - start >= min_length {
        runs.push(CandidateRun { start, end });
    }
}

/// Scan and decode runs. Decoding is lossy: malformed UTF-8 becomes U+FFFD
/// instead of aborting extraction.
pub fn extract_candidates(data: &[u8], min_length: usize) -> Vec<ExtractedString> {
    let runs = scan_runs(data, min_length);
    tracing::trace!("strings/scan found {} runs >= {} bytes", runs.len(), min_length);
    runs.into_iter()
        .map(|run| ExtractedString {
            text: String::from_utf8_lossy(&data[run.start..run.end]).into_owned(),
            offset: run.start,
        })
        .collect()
}
