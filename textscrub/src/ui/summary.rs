//! Tabular summaries for sanitize statistics and probe results.

use comfy_table::Table;
use std::io::{self, Write};
use textscrub_core::{ProbeReport, SanitizeReport};

/// Builds the per-stage replacement table.
pub fn stage_table(report: &SanitizeReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Stage", "Occurrences"]);
    for summary in &report.stages {
        table.add_row(vec![summary.stage.to_string(), summary.occurrences.to_string()]);
    }
    table.add_row(vec!["total".to_string(), report.total_replacements().to_string()]);
    table
}

/// Writes the per-stage summary with a header line.
pub fn print_stage_summary<W: Write>(report: &SanitizeReport, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "--- Sanitize Summary ---")?;
    writeln!(writer, "{}", stage_table(report))
}

/// Writes the probe result: misses first (if any), then the skipped spans.
pub fn print_probe_report<W: Write>(report: &ProbeReport, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Checked {} codepoints.", report.checked)?;

    if !report.misses.is_empty() {
        let mut misses = Table::new();
        misses.set_header(vec!["Range", "Codepoint", "Output"]);
        for miss in &report.misses {
            misses.add_row(vec![
                miss.range.to_string(),
                format!("U+{:04X}", miss.codepoint),
                format!("{:?}", miss.output),
            ]);
        }
        writeln!(writer, "{}", misses)?;
    }

    if !report.skipped.is_empty() {
        let mut skipped = Table::new();
        skipped.set_header(vec!["Range", "Skipped (not valid UTF-8)"]);
        for (name, first, last) in &report.skipped {
            skipped.add_row(vec![name.to_string(), format!("U+{:04X}..U+{:04X}", first, last)]);
        }
        writeln!(writer, "{}", skipped)?;
    }
    Ok(())
}
