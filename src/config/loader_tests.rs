//! Tests for config file loading.

use super::*;
use std::io::Write;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("quakewatch_test_{name}.toml"));
    let mut file = std::fs::File::create(&path).expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    path
}

#[test]
fn explicit_missing_path_is_an_error() {
    let path = PathBuf::from("/nonexistent/quakewatch/config.toml");
    let result = load_config_with_precedence(Some(path.clone()));
    assert!(matches!(
        result,
        Err(ConfigError::ReadError { path: p, .. }) if p == path
    ));
}

#[test]
fn valid_file_parses_all_fields() {
    let path = write_temp_config(
        "valid",
        r#"
base_url = "http://localhost:8080/fdsnws/event/1"
min_magnitude = 6.0
units_metric = false
log_file_path = "/tmp/qw.log"
"#,
    );
    let config = load_config_with_precedence(Some(path.clone()))
        .expect("valid config loads")
        .expect("config present");
    assert_eq!(
        config.base_url.as_deref(),
        Some("http://localhost:8080/fdsnws/event/1")
    );
    assert_eq!(config.min_magnitude, Some(6.0));
    assert_eq!(config.units_metric, Some(false));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/qw.log")));
    let _ = std::fs::remove_file(path);
}

#[test]
fn empty_file_yields_all_none() {
    let path = write_temp_config("empty", "");
    let config = load_config_with_precedence(Some(path.clone()))
        .expect("empty config loads")
        .expect("config present");
    assert_eq!(config, ConfigFile::default());
    let _ = std::fs::remove_file(path);
}

#[test]
fn unknown_fields_are_rejected() {
    let path = write_temp_config("unknown", "retry_count = 3\n");
    let result = load_config_with_precedence(Some(path.clone()));
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    let _ = std::fs::remove_file(path);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let path = write_temp_config("invalid", "base_url = [unterminated\n");
    let result = load_config_with_precedence(Some(path.clone()));
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    let _ = std::fs::remove_file(path);
}
