// textscrub-core/tests/options_config_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use textscrub_core::config::{self, SanitizeOptions};
use textscrub_core::sanitize;

#[test]
fn test_load_full_options_file() -> Result<()> {
    let yaml_content = r#"
strip_reserved: true
allow_newlines: true
replacement_default: "<X>"
replacement_tab: "<TAB>"
replacement_linefeed: "<LF>"
replacement_formfeed: "<FF>"
replacement_unknown: "<?>"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let options = SanitizeOptions::load_from_file(file.path())?;
    assert!(options.strip_reserved);
    assert!(options.allow_newlines);
    assert_eq!(options.replacement_default, "<X>");
    assert_eq!(options.replacement_tab, "<TAB>");
    assert_eq!(options.replacement_unknown, "<?>");
    Ok(())
}

#[test]
fn test_load_partial_options_file_keeps_defaults() -> Result<()> {
    let yaml_content = r#"
replacement_default: "[gone]"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let options = SanitizeOptions::load_from_file(file.path())?;
    let expected = SanitizeOptions {
        replacement_default: "[gone]".to_string(),
        ..config::default_options()
    };
    assert_eq!(options, expected);
    assert_eq!(sanitize("a\u{1}b\tc", &options)?, "a[gone]b c");
    Ok(())
}

#[test]
fn test_load_missing_file_fails() {
    let result = SanitizeOptions::load_from_file("/definitely/not/here/options.yaml");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to read options file"));
}

#[test]
fn test_load_malformed_yaml_fails() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"allow_newlines: [not, a, bool]\n")?;
    let err = SanitizeOptions::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse options file"));
    Ok(())
}

#[test]
fn test_options_round_trip_through_yaml() -> Result<()> {
    let original = config::debug_options();
    let yaml = serde_yml::to_string(&original)?;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    assert_eq!(SanitizeOptions::load_from_file(file.path())?, original);
    Ok(())
}
