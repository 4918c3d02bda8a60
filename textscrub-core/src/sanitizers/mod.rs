//! Byte-level matching tables and their compiled forms.
//!
//! `tables` holds the fixed evil, reserved and invalid patterns, `line_endings`
//! the literal lookup for breaks and tabs, and `compiler` turns both into the
//! process-wide matchers used by the engine.

pub mod compiler;
pub mod line_endings;
pub mod tables;
