//! `probe` command implementation.

use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use std::io;

use textscrub_core::probe_evil_ranges;

use crate::ui::{output_format, summary};

/// Probes the evil table and fails if any codepoint escaped sanitization.
pub fn run_probe() -> Result<()> {
    let report = probe_evil_ranges();
    summary::print_probe_report(&report, &mut io::stdout())?;

    if !report.is_clean() {
        bail!("{} codepoint(s) escaped sanitization", report.misses.len());
    }

    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(
        &mut io::stderr(),
        "Every representable codepoint in the evil table was removed.",
        stderr_supports_color,
    );
    Ok(())
}
