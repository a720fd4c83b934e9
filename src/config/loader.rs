//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an explicitly requested config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to hardcoded defaults.
/// Corresponds to `~/.config/quakewatch/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Feed base URL (scheme + host + `/fdsnws/event/1`).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Minimum magnitude for the startup query.
    #[serde(default)]
    pub min_magnitude: Option<f64>,

    /// Depth/radius unit labels: metric (km) when true.
    #[serde(default)]
    pub units_metric: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Load the config file with precedence:
///
/// 1. An explicit `--config` path must exist and parse; failures are
///    errors.
/// 2. Otherwise the default location is tried; a missing file there is
///    simply no config (`Ok(None)`), but a present-but-invalid file is
///    still an error (silent fallback would hide typos).
pub fn load_config_with_precedence(
    explicit_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match explicit_path {
        Some(path) => read_config_file(&path).map(Some),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config_file(&path).map(Some),
            _ => Ok(None),
        },
    }
}

/// The default config location: `<config dir>/quakewatch/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quakewatch").join("config.toml"))
}

fn read_config_file(path: &PathBuf) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadError {
        path: path.clone(),
        reason: err.to_string(),
    })?;
    toml::from_str(&contents).map_err(|err| ConfigError::ParseError {
        path: path.clone(),
        reason: err.to_string(),
    })
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
