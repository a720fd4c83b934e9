//! Configuration: defaults, file loading, env and CLI overrides.
//!
//! Resolution order is Defaults → Config File → Env Vars → CLI Args,
//! applied in that sequence so later sources win.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{default_config_path, load_config_with_precedence, ConfigError, ConfigFile};

use std::path::PathBuf;

/// Default feed base URL (USGS FDSN event service).
pub const DEFAULT_BASE_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1";

/// Default minimum magnitude for the startup query.
pub const DEFAULT_MIN_MAGNITUDE: f64 = 4.5;

// ===== ResolvedConfig =====

/// Fully resolved application configuration. Every field has a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Feed base URL.
    pub base_url: String,
    /// Minimum magnitude for the startup query.
    pub min_magnitude: f64,
    /// Depth/radius unit labels: metric (km) when true.
    pub units_metric: bool,
    /// Where tracing output is written.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            units_metric: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Default log location: `<data dir>/quakewatch/quakewatch.log`, falling
/// back to the working directory when no data dir exists.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("quakewatch").join("quakewatch.log"))
        .unwrap_or_else(|| PathBuf::from("quakewatch.log"))
}

/// Merge an optional config file over the defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    if let Some(file) = file {
        if let Some(base_url) = file.base_url {
            resolved.base_url = base_url;
        }
        if let Some(min_magnitude) = file.min_magnitude {
            resolved.min_magnitude = min_magnitude;
        }
        if let Some(units_metric) = file.units_metric {
            resolved.units_metric = units_metric;
        }
        if let Some(log_file_path) = file.log_file_path {
            resolved.log_file_path = log_file_path;
        }
    }
    resolved
}

/// Apply environment variable overrides.
///
/// Recognized: `QUAKEWATCH_BASE_URL`, `QUAKEWATCH_MIN_MAGNITUDE`,
/// `QUAKEWATCH_UNITS` (`metric`/`imperial`), `QUAKEWATCH_LOG_FILE`.
/// Unparseable values are ignored rather than fatal.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base_url) = std::env::var("QUAKEWATCH_BASE_URL") {
        if !base_url.is_empty() {
            config.base_url = base_url;
        }
    }
    if let Ok(raw) = std::env::var("QUAKEWATCH_MIN_MAGNITUDE") {
        if let Ok(value) = raw.parse() {
            config.min_magnitude = value;
        }
    }
    if let Ok(units) = std::env::var("QUAKEWATCH_UNITS") {
        match units.as_str() {
            "metric" => config.units_metric = true,
            "imperial" => config.units_metric = false,
            _ => {}
        }
    }
    if let Ok(path) = std::env::var("QUAKEWATCH_LOG_FILE") {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }
    config
}

/// Apply CLI argument overrides. `None` leaves the current value.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    base_url: Option<String>,
    min_magnitude: Option<f64>,
    log_file: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(min_magnitude) = min_magnitude {
        config.min_magnitude = min_magnitude;
    }
    if let Some(log_file) = log_file {
        config.log_file_path = log_file;
    }
    config
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_usgs() {
        let config = ResolvedConfig::default();
        assert_eq!(config.base_url, "https://earthquake.usgs.gov/fdsnws/event/1");
        assert_eq!(config.min_magnitude, 4.5);
        assert!(config.units_metric);
    }

    #[test]
    fn merge_none_is_all_defaults() {
        assert_eq!(merge_config(None), ResolvedConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = ConfigFile {
            base_url: Some("http://localhost:9000".to_string()),
            min_magnitude: Some(2.0),
            units_metric: Some(false),
            log_file_path: None,
        };
        let resolved = merge_config(Some(file));
        assert_eq!(resolved.base_url, "http://localhost:9000");
        assert_eq!(resolved.min_magnitude, 2.0);
        assert!(!resolved.units_metric);
        assert_eq!(resolved.log_file_path, default_log_path());
    }

    #[test]
    fn cli_overrides_win_over_file() {
        let file = ConfigFile {
            base_url: Some("http://from-file".to_string()),
            min_magnitude: Some(2.0),
            units_metric: None,
            log_file_path: None,
        };
        let resolved = apply_cli_overrides(
            merge_config(Some(file)),
            Some("http://from-cli".to_string()),
            Some(3.5),
            Some(PathBuf::from("/tmp/cli.log")),
        );
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.min_magnitude, 3.5);
        assert_eq!(resolved.log_file_path, PathBuf::from("/tmp/cli.log"));
    }

    #[test]
    fn cli_none_leaves_values_alone() {
        let resolved = apply_cli_overrides(ResolvedConfig::default(), None, None, None);
        assert_eq!(resolved, ResolvedConfig::default());
    }
}
