//! errors.rs - Custom error types for the textscrub-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::str::Utf8Error;
use thiserror::Error;

/// This enum represents all possible error types in the `textscrub-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SanitizeError {
    /// The input is not well-formed UTF-8. Nothing was produced.
    #[error("Input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding { valid_up_to: usize },

    #[error("Not a number: '{0}'")]
    NotANumber(String),

    #[error("Value out of range: '{0}'")]
    OutOfRange(String),

    #[error("Failed to compile built-in pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Failed to build line-ending lookup: {0}")]
    LookupCompilation(String),
}

impl From<Utf8Error> for SanitizeError {
    fn from(err: Utf8Error) -> Self {
        SanitizeError::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}
