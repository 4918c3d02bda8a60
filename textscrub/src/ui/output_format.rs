//! Helpers for writing status messages to the terminal.
//!
//! Colour is only applied when the caller says the target stream supports it,
//! so redirected output and test captures stay plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Prints a warning message.
pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg.yellow())
    } else {
        writeln!(writer, "Warning: {}", msg)
    }
}

/// Prints a success message.
pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.green())
    } else {
        writeln!(writer, "{}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_has_no_escapes() {
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "careful", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Warning: careful\n");
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let mut buf = Vec::new();
        print_success_message(&mut buf, "hello", true).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains("hello"));
        assert!(s.contains('\u{1b}'));
    }
}
