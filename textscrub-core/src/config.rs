//! Configuration management for `textscrub-core`.
//!
//! This module defines [`SanitizeOptions`], the immutable settings passed into every
//! sanitization call, along with its two canonical presets. Options can also be
//! serialized to and loaded from YAML so the command-line harness can keep
//! reusable replacement policies on disk.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sanitizers::line_endings::BreakClass;

/// The visible token every stripped span becomes under [`debug_options`].
pub const DEBUG_MARKER: &str = " { SANITIZED } ";

/// Settings for a single sanitization call.
///
/// Missing fields in a YAML document fall back to the values of [`default_options`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Strip the whole reserved set (control, private-use, unassigned) instead of
    /// only the known noncharacter sequences.
    pub strip_reserved: bool,
    /// Keep line structure: line breaks become `\n`, paragraph/page breaks `\n\n`.
    pub allow_newlines: bool,
    /// Replaces evil, reserved and invalid spans.
    pub replacement_default: String,
    /// Replaces horizontal tabs, whatever the newline policy.
    pub replacement_tab: String,
    /// Replaces line breaks when newlines are not allowed.
    pub replacement_linefeed: String,
    /// Replaces paragraph and page breaks when newlines are not allowed.
    pub replacement_formfeed: String,
    /// Replaces U+FFFC and U+FFFD.
    pub replacement_unknown: String,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            strip_reserved: false,
            allow_newlines: false,
            replacement_default: String::new(),
            replacement_tab: " ".to_string(),
            replacement_linefeed: " ".to_string(),
            replacement_formfeed: " ".to_string(),
            replacement_unknown: "?".to_string(),
        }
    }
}

/// The destructive preset: stripped spans vanish, whitespace collapses to single spaces
/// and unknown-object characters become `?`.
pub fn default_options() -> SanitizeOptions {
    SanitizeOptions::default()
}

/// The diagnostic preset: every replacement is [`DEBUG_MARKER`], so each matched span
/// is visible in the output. Not meant for production text.
pub fn debug_options() -> SanitizeOptions {
    SanitizeOptions {
        strip_reserved: false,
        allow_newlines: false,
        replacement_default: DEBUG_MARKER.to_string(),
        replacement_tab: DEBUG_MARKER.to_string(),
        replacement_linefeed: DEBUG_MARKER.to_string(),
        replacement_formfeed: DEBUG_MARKER.to_string(),
        replacement_unknown: DEBUG_MARKER.to_string(),
    }
}

impl SanitizeOptions {
    /// Loads options from a YAML file. Fields not present keep their default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitize options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        let options: SanitizeOptions = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse options file {}", path.display()))?;

        debug!(
            "Loaded options from {} (strip_reserved: {}, allow_newlines: {}).",
            path.display(),
            options.strip_reserved,
            options.allow_newlines
        );
        Ok(options)
    }

    /// Resolves the replacement text for a line-ending lookup hit.
    pub fn replacement_for(&self, class: BreakClass) -> &str {
        match class {
            BreakClass::Tab => &self.replacement_tab,
            BreakClass::Unknown => &self.replacement_unknown,
            BreakClass::Linefeed if self.allow_newlines => "\n",
            BreakClass::Formfeed if self.allow_newlines => "\n\n",
            BreakClass::Linefeed => &self.replacement_linefeed,
            BreakClass::Formfeed => &self.replacement_formfeed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_values() {
        let opts = default_options();
        assert!(!opts.strip_reserved);
        assert!(!opts.allow_newlines);
        assert_eq!(opts.replacement_default, "");
        assert_eq!(opts.replacement_tab, " ");
        assert_eq!(opts.replacement_unknown, "?");
    }

    #[test]
    fn test_debug_preset_marks_everything() {
        let opts = debug_options();
        for rep in [
            &opts.replacement_default,
            &opts.replacement_tab,
            &opts.replacement_linefeed,
            &opts.replacement_formfeed,
            &opts.replacement_unknown,
        ] {
            assert_eq!(rep, DEBUG_MARKER);
        }
    }

    #[test]
    fn test_replacement_for_respects_newline_policy() {
        let mut opts = default_options();
        assert_eq!(opts.replacement_for(BreakClass::Linefeed), " ");
        assert_eq!(opts.replacement_for(BreakClass::Formfeed), " ");

        opts.allow_newlines = true;
        assert_eq!(opts.replacement_for(BreakClass::Linefeed), "\n");
        assert_eq!(opts.replacement_for(BreakClass::Formfeed), "\n\n");
        // Tab and unknown ignore the newline policy.
        assert_eq!(opts.replacement_for(BreakClass::Tab), " ");
        assert_eq!(opts.replacement_for(BreakClass::Unknown), "?");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let opts: SanitizeOptions = serde_yml::from_str("allow_newlines: true\n").unwrap();
        assert!(opts.allow_newlines);
        assert_eq!(opts.replacement_tab, " ");
        assert_eq!(opts.replacement_unknown, "?");
    }
}
