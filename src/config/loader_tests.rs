//! Tests for config/loader

use super::*;
use crate::jump::CharsetMode;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_path_location() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/zoomiz/config.toml"));
    }
}

#[test]
fn test_missing_file_uses_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(&dir.path().join("nope.toml"));

    assert_eq!(result.config, Config::default());
    assert_eq!(result.warning, None);
}

#[test]
fn test_valid_file_is_loaded() {
    let file = write_config(
        r#"
[jump]
label_charset = "numeric"
case_sensitive = true

[style]
label_background = "blue"
"#,
    );

    let result = load_config_from_path(file.path());
    assert_eq!(result.warning, None);
    assert_eq!(result.config.jump.label_charset, CharsetMode::Numeric);
    assert!(result.config.jump.case_sensitive);
    assert_eq!(result.config.style.label_background, "blue");
}

#[test]
fn test_broken_file_uses_defaults_with_warning() {
    let file = write_config("[jump\nlabel_charset = ");

    let result = load_config_from_path(file.path());
    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("should warn");
    assert!(warning.contains("Invalid config file"));
}

#[test]
fn test_directory_path_warns() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(dir.path());

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_some());
}

#[test]
fn test_parse_empty_config() {
    assert_eq!(parse_config_toml("").unwrap(), Config::default());
}

#[test]
fn test_parse_error_is_config_parse() {
    let err = parse_config_toml("jump = 3").unwrap_err();
    assert!(matches!(err, ZoomizError::ConfigParse(_)));
}
