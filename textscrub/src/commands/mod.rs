//! Subcommand implementations for the textscrub CLI.

pub mod parse;
pub mod probe;
pub mod sanitize;
