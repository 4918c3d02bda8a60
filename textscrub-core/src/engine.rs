// textscrub-core/src/engine.rs
//! The three-stage sanitization pipeline.
//!
//! 1. Reject anything that is not well-formed UTF-8.
//! 2. Replace evil byte ranges, then either the reserved set or the invalid
//!    noncharacter sequences (never both).
//! 3. Rewrite line endings, tabs and unknown-object characters via the literal lookup.
//!
//! [`sanitize`] returns only the final text. [`analyze`] runs the same pipeline and
//! also reports how many spans each stage replaced.
//!
//! License: MIT OR APACHE 2.0

use log::trace;
use regex::bytes::Regex;
use std::fmt;

use crate::config::SanitizeOptions;
use crate::errors::SanitizeError;
use crate::sanitizers::compiler::matchers;

/// A replacement stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Evil,
    Reserved,
    Invalid,
    LineEnding,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Evil => "evil",
            Stage::Reserved => "reserved",
            Stage::Invalid => "invalid",
            Stage::LineEnding => "line_ending",
        };
        f.write_str(name)
    }
}

/// How many spans a stage replaced during one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSummary {
    pub stage: Stage,
    pub occurrences: usize,
}

/// The sanitized text plus one summary per stage that ran, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeReport {
    pub output: String,
    pub stages: Vec<StageSummary>,
}

impl SanitizeReport {
    /// Total number of spans replaced across all stages.
    pub fn total_replacements(&self) -> usize {
        self.stages.iter().map(|s| s.occurrences).sum()
    }
}

/// Replaces every non-overlapping, leftmost-first match of `re` with `replacement`.
fn scrub(re: &Regex, haystack: &[u8], replacement: &[u8]) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(haystack.len());
    let mut last_end = 0usize;
    let mut count = 0usize;

    for m in re.find_iter(haystack) {
        out.extend_from_slice(&haystack[last_end..m.start()]);
        out.extend_from_slice(replacement);
        last_end = m.end();
        count += 1;
    }
    out.extend_from_slice(&haystack[last_end..]);
    (out, count)
}

/// Sanitizes `input` and reports per-stage replacement counts.
///
/// Fails with [`SanitizeError::InvalidEncoding`] if `input` is not well-formed UTF-8;
/// no partial output is produced in that case.
pub fn analyze<B: AsRef<[u8]>>(
    input: B,
    options: &SanitizeOptions,
) -> Result<SanitizeReport, SanitizeError> {
    let bytes = input.as_ref();
    std::str::from_utf8(bytes)?;

    let compiled = matchers();
    let default_rep = options.replacement_default.as_bytes();
    let mut stages = Vec::with_capacity(3);

    let (text, evil_count) = scrub(&compiled.evil, bytes, default_rep);
    stages.push(StageSummary { stage: Stage::Evil, occurrences: evil_count });

    let (matcher, stage) = if options.strip_reserved {
        (&compiled.reserved, Stage::Reserved)
    } else {
        (&compiled.invalid, Stage::Invalid)
    };
    let (text, reserved_count) = scrub(matcher, &text, default_rep);
    stages.push(StageSummary { stage, occurrences: reserved_count });

    let (text, break_count) = compiled
        .line_endings
        .replace_all(&text, |class| options.replacement_for(class));
    stages.push(StageSummary { stage: Stage::LineEnding, occurrences: break_count });

    trace!(
        "Sanitized {} bytes into {} bytes (evil: {}, {}: {}, line_ending: {}).",
        bytes.len(),
        text.len(),
        evil_count,
        stage,
        reserved_count,
        break_count
    );

    // Matches cover whole codepoints of already-validated input, so this holds.
    let output = String::from_utf8(text).map_err(|e| SanitizeError::from(e.utf8_error()))?;
    Ok(SanitizeReport { output, stages })
}

/// Sanitizes `input` according to `options`.
///
/// Accepts anything byte-like (`&str`, `String`, `&[u8]`, `Vec<u8>`). The only error
/// is [`SanitizeError::InvalidEncoding`].
pub fn sanitize<B: AsRef<[u8]>>(input: B, options: &SanitizeOptions) -> Result<String, SanitizeError> {
    analyze(input, options).map(|report| report.output)
}
