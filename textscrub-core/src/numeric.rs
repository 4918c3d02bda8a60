// File: textscrub-core/src/numeric.rs
//! Base-10 numeric coercion helpers.
//!
//! These sit next to the sanitizer for convenience but are independent of it: the
//! input string is parsed as-is with the standard parser, and failures are mapped
//! onto [`SanitizeError::NotANumber`] and [`SanitizeError::OutOfRange`].
//!
//! License: MIT OR APACHE 2.0

use std::num::{IntErrorKind, ParseIntError};

use crate::errors::SanitizeError;

fn map_int_error(input: &str, err: ParseIntError) -> SanitizeError {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            SanitizeError::OutOfRange(input.to_string())
        }
        _ => SanitizeError::NotANumber(input.to_string()),
    }
}

/// Parses a decimal `i32`.
pub fn parse_int32(input: &str) -> Result<i32, SanitizeError> {
    input.parse::<i32>().map_err(|e| map_int_error(input, e))
}

/// Parses a decimal `i64`.
pub fn parse_int64(input: &str) -> Result<i64, SanitizeError> {
    input.parse::<i64>().map_err(|e| map_int_error(input, e))
}

/// Parses an `f64`.
///
/// A finite literal too large for `f64` parses to infinity; that is reported as
/// `OutOfRange`. Explicit `inf`/`infinity`/`nan` spellings are accepted.
pub fn parse_float64(input: &str) -> Result<f64, SanitizeError> {
    let Ok(value) = input.parse::<f64>() else {
        return Err(SanitizeError::NotANumber(input.to_string()));
    };

    if value.is_infinite() {
        let unsigned = input.trim_start_matches(['+', '-']);
        if !unsigned.to_ascii_lowercase().starts_with("inf") {
            return Err(SanitizeError::OutOfRange(input.to_string()));
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int64() {
        assert_eq!(parse_int64("123").unwrap(), 123);
        assert_eq!(parse_int64("-9223372036854775808").unwrap(), i64::MIN);
        assert_eq!(parse_int64("+7").unwrap(), 7);
        assert!(matches!(parse_int64("12x"), Err(SanitizeError::NotANumber(_))));
        assert!(matches!(parse_int64(""), Err(SanitizeError::NotANumber(_))));
        assert!(matches!(parse_int64(" 1"), Err(SanitizeError::NotANumber(_))));
        assert!(matches!(
            parse_int64("9223372036854775808"),
            Err(SanitizeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_int32() {
        assert_eq!(parse_int32("2147483647").unwrap(), i32::MAX);
        assert!(matches!(parse_int32("99999999999"), Err(SanitizeError::OutOfRange(_))));
        assert!(matches!(parse_int32("-99999999999"), Err(SanitizeError::OutOfRange(_))));
        assert!(matches!(parse_int32("1.5"), Err(SanitizeError::NotANumber(_))));
    }

    #[test]
    fn test_parse_float64() {
        assert_eq!(parse_float64("1.5").unwrap(), 1.5);
        assert_eq!(parse_float64("-2e3").unwrap(), -2000.0);
        assert!(parse_float64("-inf").unwrap().is_infinite());
        assert!(parse_float64("NaN").unwrap().is_nan());
        assert!(matches!(parse_float64("1e400"), Err(SanitizeError::OutOfRange(_))));
        assert!(matches!(parse_float64("-1e400"), Err(SanitizeError::OutOfRange(_))));
        assert!(matches!(parse_float64("one"), Err(SanitizeError::NotANumber(_))));
        assert!(matches!(parse_float64(""), Err(SanitizeError::NotANumber(_))));
    }
}
