//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::HighlightStyle;
use quickjump_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_is_file_not_found() {
    let err = load_from_path(Path::new("/tmp/nonexistent_quickjump_config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[picker]
max_results = 20

[highlight]
style = "markers"
open_marker = "<<"
close_marker = ">>"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.picker.max_results, 20);
    assert_eq!(config.highlight.style, HighlightStyle::Markers);
    assert_eq!(config.highlight.open_marker, "<<");
    // Defaults preserved
    assert!(config.picker.remember_last_query);
    assert_eq!(config.highlight.color, "#00d4ff");
    assert_eq!(config.keybinds.confirm, "Enter");
}

#[test]
fn load_invalid_toml_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    match load_from_path(&path).unwrap_err() {
        ConfigError::ParseError(msg) => assert!(msg.contains("config.toml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_values_are_kept_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[picker]\nmax_results = 5000\n\n[highlight]\ncolor = \"teal\"\n",
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.picker.max_results, 5000);
    assert_eq!(config.highlight.color, "teal");
}

#[test]
fn parse_config_fills_defaults() {
    let config = parse_config("[logging]\nlevel = \"ERROR\"\n").unwrap();
    assert_eq!(config.logging.level.as_directive(), "error");
    assert_eq!(config.picker.max_results, 50);
    assert!(parse_config("[logging\n").is_err());
}

#[test]
fn write_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quickjump").join("config.toml");

    write_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.picker.max_results, 50);
    assert_eq!(config.highlight.style, HighlightStyle::Ansi);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config = parse_config(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // Skipped where the platform has no config dir.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("quickjump"));
        assert!(path_str.ends_with("config.toml"));
    }
}
