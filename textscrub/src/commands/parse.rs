//! `parse` command implementation.

use anyhow::{Context, Result};

use textscrub_core::{parse_float64, parse_int32, parse_int64};

use crate::cli::{NumberKind, ParseCommand};

/// Parses the value and returns its canonical rendering.
pub fn parse_value(cmd: &ParseCommand) -> Result<String> {
    let rendered = match cmd.kind {
        NumberKind::Int32 => parse_int32(&cmd.value).map(|v| v.to_string()),
        NumberKind::Int64 => parse_int64(&cmd.value).map(|v| v.to_string()),
        NumberKind::Float64 => parse_float64(&cmd.value).map(|v| v.to_string()),
    };
    rendered.with_context(|| format!("Failed to parse '{}' as {:?}", cmd.value, cmd.kind))
}

pub fn run_parse(cmd: &ParseCommand) -> Result<()> {
    println!("{}", parse_value(cmd)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(kind: NumberKind, value: &str) -> ParseCommand {
        ParseCommand { kind, value: value.to_string() }
    }

    #[test]
    fn test_parse_value_renders_numbers() {
        assert_eq!(parse_value(&cmd(NumberKind::Int64, "-42")).unwrap(), "-42");
        assert_eq!(parse_value(&cmd(NumberKind::Float64, "2.5")).unwrap(), "2.5");
    }

    #[test]
    fn test_parse_value_reports_cause() {
        let err = parse_value(&cmd(NumberKind::Int32, "99999999999")).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Failed to parse '99999999999' as Int32"));
        assert!(chain.contains("Value out of range"));
    }
}
