// textscrub/src/main.rs
//! textscrub entry point.
//!
//! Parses arguments, configures logging and dispatches to the selected command.

use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use textscrub::cli::{Cli, Commands};
use textscrub::commands::{parse, probe, sanitize};
use textscrub::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("textscrub started. Version: {}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Sanitize(cmd) => sanitize::run_sanitize(cmd),
        Commands::Probe => probe::run_probe(),
        Commands::Parse(cmd) => parse::run_parse(cmd),
    }
}
