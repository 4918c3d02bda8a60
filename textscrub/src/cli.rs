//! This file defines the command-line interface (CLI) for the textscrub harness,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "textscrub",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scrub unsafe codepoints from UTF-8 text",
    long_about = "textscrub removes control characters, noncharacters, byte order marks and other codepoints that are unsafe to display or store, and folds every line-separator variant into a single newline convention. Input that is not well-formed UTF-8 is rejected rather than repaired.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable all logging output.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `textscrub` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes an input file or stdin.
    #[command(about = "Sanitizes an input file or stdin.")]
    Sanitize(SanitizeCommand),

    /// Walks every codepoint of the evil table through the debug preset.
    #[command(about = "Checks that every codepoint in the built-in evil ranges is removed.")]
    Probe,

    /// Runs one of the numeric coercion helpers.
    #[command(about = "Parses a decimal number with the library's numeric helpers.")]
    Parse(ParseCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Built-in options preset, used when no config file is given.
    #[arg(long, short = 'p', value_enum, default_value = "default", help = "Select the built-in options preset.")]
    pub preset: Preset,

    /// Path to a sanitize options file (YAML). Takes precedence over --preset.
    #[arg(long = "config", value_name = "FILE", conflicts_with = "preset", help = "Path to a sanitize options file (YAML).")]
    pub config: Option<PathBuf>,

    /// Strip all reserved codepoints (control, private-use, unassigned).
    #[arg(long = "strip-reserved", help = "Strip control, private-use and unassigned codepoints.")]
    pub strip_reserved: bool,

    /// Keep line structure instead of collapsing breaks.
    #[arg(long = "allow-newlines", help = "Normalize line breaks to \\n instead of collapsing them.")]
    pub allow_newlines: bool,

    /// Print how many spans each stage replaced.
    #[arg(long = "stats", help = "Print a per-stage replacement summary to stderr.")]
    pub stats: bool,
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseCommand {
    /// Target numeric type.
    #[arg(value_enum, value_name = "TYPE")]
    pub kind: NumberKind,

    /// The decimal string to parse.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

/// Built-in option presets.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Preset {
    /// Destructive stripping with single-space whitespace.
    Default,
    /// Every replaced span becomes a visible marker.
    Debug,
}

/// Numeric types supported by the `parse` command.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum NumberKind {
    Int32,
    Int64,
    Float64,
}
