// textscrub-core/src/lib.rs
//! # textscrub Core Library
//!
//! `textscrub-core` removes or replaces codepoints that are unsafe for display,
//! storage or indexing in text that claims to be UTF-8: control characters,
//! noncharacters, byte order marks, deprecated format and tag characters, and the
//! zoo of line-separator variants, which are folded into one newline convention.
//!
//! The library is pure and stateless apart from the compiled matchers, which are
//! built once per process and shared read-only by every call.
//!
//! ## Modules
//!
//! * `config`: [`SanitizeOptions`] and the `default` / `debug` presets.
//! * `sanitizers`: The fixed byte-range tables and their compiled matchers.
//! * `engine`: The three-stage pipeline behind [`sanitize`] and [`analyze`].
//! * `numeric`: Base-10 numeric coercion helpers.
//! * `probe`: Coverage check that walks the evil table through the debug preset.
//! * `errors`: The [`SanitizeError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use textscrub_core::{default_options, sanitize, SanitizeOptions};
//!
//! let cleaned = sanitize("bell\u{7} tab\tCRLF\r\nend", &default_options()).unwrap();
//! assert_eq!(cleaned, "bell tab CRLF end");
//!
//! let keep_lines = SanitizeOptions { allow_newlines: true, ..default_options() };
//! assert_eq!(sanitize("a\r\nb", &keep_lines).unwrap(), "a\nb");
//!
//! // Malformed input is rejected outright.
//! assert!(sanitize(b"bad \x80 byte", &default_options()).is_err());
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`SanitizeError`]. The library never logs
//! errors itself; callers decide whether to propagate them or substitute a default.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod numeric;
pub mod probe;
pub mod sanitizers;

/// Re-exports the options type and its presets.
pub use config::{debug_options, default_options, SanitizeOptions, DEBUG_MARKER};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SanitizeError;

/// Re-exports the pipeline entry points and reporting types.
pub use engine::{analyze, sanitize, SanitizeReport, Stage, StageSummary};

/// Re-exports the numeric coercion helpers.
pub use numeric::{parse_float64, parse_int32, parse_int64};

/// Re-exports the range self-check and its report types.
pub use probe::{probe_evil_ranges, ProbeMiss, ProbeReport};

// Lower-level access to the compiled tables for advanced usage.
pub use sanitizers::compiler::{matchers, CompiledMatchers};
pub use sanitizers::line_endings::BreakClass;
pub use sanitizers::tables::{ByteRange, EVIL_RANGES};
