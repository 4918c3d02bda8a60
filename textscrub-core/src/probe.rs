//! probe.rs - Coverage check for the evil range table.
//!
//! Walks every codepoint of every evil range through the debug preset and collects
//! the ones that did not come back as exactly [`DEBUG_MARKER`]. Codepoints that
//! cannot exist in valid UTF-8 text (surrogates, values past U+10FFFF) are reported
//! as skipped spans, since the encoding check rejects them before any matching runs.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::{debug_options, DEBUG_MARKER};
use crate::engine::sanitize;
use crate::sanitizers::tables::{ByteRange, EVIL_RANGES};

/// A codepoint from the evil table that escaped sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeMiss {
    pub range: &'static str,
    pub codepoint: u32,
    /// What the debug preset produced instead of the marker.
    pub output: String,
}

/// Outcome of a full probe run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub checked: usize,
    pub misses: Vec<ProbeMiss>,
    /// Ranges (name, first, last) whose codepoints are not representable as text.
    pub skipped: Vec<(&'static str, u32, u32)>,
}

impl ProbeReport {
    pub fn is_clean(&self) -> bool {
        self.misses.is_empty()
    }
}

fn probe_range(range: &ByteRange, report: &mut ProbeReport) {
    let opts = debug_options();
    let mut skip_start: Option<u32> = None;

    for cp in range.first..=range.last {
        let Some(c) = char::from_u32(cp) else {
            skip_start.get_or_insert(cp);
            continue;
        };
        if let Some(start) = skip_start.take() {
            report.skipped.push((range.name, start, cp - 1));
        }

        report.checked += 1;
        match sanitize(c.to_string(), &opts) {
            Ok(out) if out == DEBUG_MARKER => {}
            Ok(out) => report.misses.push(ProbeMiss { range: range.name, codepoint: cp, output: out }),
            Err(e) => report.misses.push(ProbeMiss { range: range.name, codepoint: cp, output: e.to_string() }),
        }
    }
    if let Some(start) = skip_start {
        report.skipped.push((range.name, start, range.last));
    }
}

/// Probes every range in the evil table.
pub fn probe_evil_ranges() -> ProbeReport {
    let mut report = ProbeReport::default();
    for range in EVIL_RANGES {
        probe_range(range, &mut report);
    }
    debug!(
        "Probed {} codepoints: {} misses, {} skipped spans.",
        report.checked,
        report.misses.len(),
        report.skipped.len()
    );
    report
}
