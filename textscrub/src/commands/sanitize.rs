//! `sanitize` command implementation: read bytes, scrub them, write text.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use textscrub_core::{analyze, debug_options, default_options, SanitizeOptions};

use crate::cli::{Preset, SanitizeCommand};
use crate::ui::{output_format, summary};

/// Builds the effective options: config file or preset, then flag overrides.
///
/// Also returns one warning per flag that replaced a `false` set in the options file.
pub fn resolve_options(cmd: &SanitizeCommand) -> Result<(SanitizeOptions, Vec<String>)> {
    let mut options = match &cmd.config {
        Some(path) => SanitizeOptions::load_from_file(path)?,
        None => match cmd.preset {
            Preset::Default => default_options(),
            Preset::Debug => debug_options(),
        },
    };

    let mut overrides = Vec::new();
    if cmd.strip_reserved {
        if cmd.config.is_some() && !options.strip_reserved {
            overrides.push("--strip-reserved overrides 'strip_reserved: false' from the options file".to_string());
        }
        options.strip_reserved = true;
    }
    if cmd.allow_newlines {
        if cmd.config.is_some() && !options.allow_newlines {
            overrides.push("--allow-newlines overrides 'allow_newlines: false' from the options file".to_string());
        }
        options.allow_newlines = true;
    }
    debug!("Effective sanitize options: {:?}", options);
    Ok((options, overrides))
}

fn read_input(input_file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Runs the command. The sanitized text is written verbatim, without a trailing newline.
pub fn run_sanitize(cmd: &SanitizeCommand) -> Result<()> {
    info!("Starting sanitize operation.");
    let (options, overrides) = resolve_options(cmd)?;
    let stderr_supports_color = io::stderr().is_terminal();
    for warning in &overrides {
        output_format::print_warn_message(&mut io::stderr(), warning, stderr_supports_color)?;
    }

    let input = read_input(cmd.input_file.as_ref())?;

    let report = analyze(&input, &options).context("Sanitization failed")?;
    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        input.len(),
        report.output.len()
    );

    match &cmd.output {
        Some(path) => {
            fs::write(path, report.output.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            let _ = output_format::print_success_message(
                &mut io::stderr(),
                &format!("Sanitized content written to {}", path.display()),
                stderr_supports_color,
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(report.output.as_bytes())?;
            writer.flush()?;
        }
    }

    if cmd.stats {
        summary::print_stage_summary(&report, &mut io::stderr())?;
    }

    info!("Sanitize operation completed.");
    Ok(())
}
