//! quakewatch - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// TUI browser for the USGS FDSN earthquake event feed.
#[derive(Parser, Debug)]
#[command(name = "quakewatch")]
#[command(version)]
#[command(about = "Browse recent seismic events from the USGS feed in the terminal")]
pub struct Args {
    /// Feed base URL (overrides config file and environment)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Minimum magnitude for the startup query
    #[arg(short, long)]
    pub min_magnitude: Option<f64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the tracing log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Skip the startup fetch (start with an empty view)
    #[arg(long)]
    pub offline: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = quakewatch::config::load_config_with_precedence(args.config.clone())?;
        let merged = quakewatch::config::merge_config(config_file);
        let with_env = quakewatch::config::apply_env_overrides(merged);
        quakewatch::config::apply_cli_overrides(
            with_env,
            args.base_url.clone(),
            args.min_magnitude,
            args.log_file.clone(),
        )
    };

    quakewatch::logging::init(&config.log_file_path)?;

    info!(config = ?config, offline = args.offline, "configuration resolved");

    quakewatch::view::run(&config, args.offline)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["quakewatch", "--help"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn version_does_not_error() {
        let result = Args::try_parse_from(["quakewatch", "--version"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayVersion
        );
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["quakewatch"]);
        assert_eq!(args.base_url, None);
        assert_eq!(args.min_magnitude, None);
        assert_eq!(args.config, None);
        assert_eq!(args.log_file, None);
        assert!(!args.offline);
    }

    #[test]
    fn base_url_flag() {
        let args = Args::parse_from(["quakewatch", "--base-url", "http://localhost:9000"]);
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn min_magnitude_short_and_long() {
        let args = Args::parse_from(["quakewatch", "-m", "6.0"]);
        assert_eq!(args.min_magnitude, Some(6.0));
        let args = Args::parse_from(["quakewatch", "--min-magnitude", "2.5"]);
        assert_eq!(args.min_magnitude, Some(2.5));
    }

    #[test]
    fn min_magnitude_rejects_garbage() {
        let result = Args::try_parse_from(["quakewatch", "-m", "big"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_and_log_file_paths() {
        let args = Args::parse_from([
            "quakewatch",
            "--config",
            "/custom/config.toml",
            "--log-file",
            "/tmp/qw.log",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/qw.log")));
    }

    #[test]
    fn offline_flag() {
        let args = Args::parse_from(["quakewatch", "--offline"]);
        assert!(args.offline);
    }

    #[test]
    fn cli_flows_through_config_precedence_chain() {
        use quakewatch::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            base_url: Some("http://from-file".to_string()),
            min_magnitude: None,
            units_metric: None,
            log_file_path: None,
        };
        let merged = merge_config(Some(config_file));
        assert_eq!(merged.base_url, "http://from-file");

        let with_cli =
            apply_cli_overrides(merged, Some("http://from-cli".to_string()), None, None);
        assert_eq!(with_cli.base_url, "http://from-cli");
    }
}
