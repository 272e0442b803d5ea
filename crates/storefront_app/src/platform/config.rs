use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use storefront_engine::{FeedQuery, FetchSettings};
use thiserror::Error;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "storefront.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogTarget {
    File,
    Terminal,
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "GameGear Pro storefront in the terminal")]
pub(crate) struct Cli {
    /// Base URL of the catalog service.
    #[arg(long, env = "STOREFRONT_API_BASE")]
    pub api_base: Option<String>,
    /// Settings file (RON). A missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub skip: Option<u32>,
    /// Catalog category id to list.
    #[arg(long)]
    pub category: Option<u64>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,
    #[arg(long, default_value = storefront_logging::DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
    /// Log at debug level.
    #[arg(long, short)]
    pub verbose: bool,
}

/// Contents of the optional settings file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StoredSettings {
    pub api_base: Option<String>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    pub category_id: Option<u64>,
    pub search: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Read the settings file. A missing file yields defaults.
pub(crate) fn load_settings(path: &Path) -> Result<StoredSettings, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(StoredSettings::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Merge CLI flags over stored settings over built-in defaults.
pub(crate) fn resolve_fetch_settings(cli: &Cli, stored: StoredSettings) -> FetchSettings {
    let defaults = FetchSettings::default();
    let base_url = cli
        .api_base
        .clone()
        .or(stored.api_base)
        .unwrap_or_else(|| defaults.base_url.clone());

    FetchSettings {
        base_url,
        query: FeedQuery {
            skip: cli.skip.or(stored.skip),
            limit: cli.limit.or(stored.limit),
            category_id: cli.category.or(stored.category_id),
            search: cli.search.clone().or(stored.search),
        },
        connect_timeout: stored
            .connect_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.connect_timeout),
        request_timeout: stored
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        ..defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["storefront"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(settings, StoredSettings::default());
    }

    #[test]
    fn parses_partial_settings_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("storefront.ron");
        fs::write(
            &path,
            r#"(api_base: Some("http://catalog.internal:8000"), limit: Some(12))"#,
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(
            settings.api_base.as_deref(),
            Some("http://catalog.internal:8000")
        );
        assert_eq!(settings.limit, Some(12));
        assert_eq!(settings.search, None);
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("storefront.ron");
        fs::write(&path, "api_base = 'nope'").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn cli_flags_override_stored_settings() {
        let stored = StoredSettings {
            api_base: Some("http://from-file".to_string()),
            limit: Some(12),
            category_id: Some(4),
            request_timeout_secs: Some(5),
            ..StoredSettings::default()
        };
        let cli = cli(&["--api-base", "http://from-cli", "--limit", "3"]);

        let settings = resolve_fetch_settings(&cli, stored);
        assert_eq!(settings.base_url, "http://from-cli");
        assert_eq!(settings.query.limit, Some(3));
        assert_eq!(settings.query.category_id, Some(4));
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.products_path, storefront_engine::PRODUCTS_PATH);
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let cli = Cli::try_parse_from(["storefront", "--api-base", "http://localhost:8000"])
            .unwrap();
        let settings = resolve_fetch_settings(&cli, StoredSettings::default());
        let defaults = FetchSettings::default();

        assert_eq!(settings.query, FeedQuery::default());
        assert_eq!(settings.request_timeout, defaults.request_timeout);
        assert_eq!(cli.log, LogTarget::File);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }
}
