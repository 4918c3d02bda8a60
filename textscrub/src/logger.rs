//! Logging setup for the textscrub binary.
//!
//! `RUST_LOG` is honoured unless an explicit level is passed in, which is how
//! `--quiet` and `--debug` take precedence over the environment.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the global `env_logger`. Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
