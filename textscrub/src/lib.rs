// textscrub/src/lib.rs
//! # textscrub CLI
//!
//! Command-line front end for `textscrub-core`: argument parsing, logging setup,
//! the `sanitize`, `probe` and `parse` commands, and terminal output helpers.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
