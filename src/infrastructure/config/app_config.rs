//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::application::DEFAULT_MAX_CONCURRENT_FETCHES;
use crate::infrastructure::cache::{CacheDirectory, TomlCacheIndex};
use crate::infrastructure::http::{DEFAULT_SOURCE_URL, DEFAULT_USER_AGENT};

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, from `config.toml` overlaid with CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// URL of the text document listing image URLs.
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Directory holding cached image files.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// File holding the url -> cached file index.
    #[serde(default)]
    pub index_path: Option<PathBuf>,

    /// Skip the disk cache entirely.
    #[serde(skip)]
    pub no_cache: bool,

    /// Maximum number of images fetched at the same time.
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// HTTP client configuration.
    #[serde(default)]
    pub http: HttpConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_concurrent_fetches() -> usize {
    DEFAULT_MAX_CONCURRENT_FETCHES
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(source_url) = args.source_url {
            self.source_url = source_url;
        }
        if let Some(cache_dir) = args.cache_dir {
            self.cache_dir = Some(cache_dir);
        }
        if let Some(index_path) = args.index_path {
            self.index_path = Some(index_path);
        }
        if args.no_cache {
            self.no_cache = true;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.http.timeout_secs = timeout_secs;
        }
        if let Some(max) = args.max_concurrent_fetches {
            self.max_concurrent_fetches = max;
        }
    }

    /// Returns effective cache directory.
    #[must_use]
    pub fn effective_cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir
            .clone()
            .or_else(CacheDirectory::default_location)
    }

    /// Returns effective index path.
    #[must_use]
    pub fn effective_index_path(&self) -> Option<PathBuf> {
        self.index_path
            .clone()
            .or_else(TomlCacheIndex::default_location)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            source_url: default_source_url(),
            cache_dir: None,
            index_path: None,
            no_cache: false,
            max_concurrent_fetches: default_max_concurrent_fetches(),
            http: HttpConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            source_url = "https://example.com/list.txt"
            log_level = "debug"

            [http]
            timeout_secs = 5
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.source_url, "https://example.com/list.txt");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(
            config.max_concurrent_fetches,
            DEFAULT_MAX_CONCURRENT_FETCHES
        );
        assert!(config.cache_dir.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.http.timeout_secs, 30);
        assert!(!config.no_cache);
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            cache_dir = "/var/cache/pictures"
            max_concurrent_fetches = 8
        "#,
        )
        .unwrap();

        let args = CliArgs::parse_from([
            "picture-cache",
            "--cache-dir",
            "/tmp/pictures",
            "--log-level",
            "warn",
            "--no-cache",
            "--timeout-secs",
            "3",
        ]);
        config.merge_with_args(args);

        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/pictures")));
        assert_eq!(config.effective_cache_dir(), Some(PathBuf::from("/tmp/pictures")));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.max_concurrent_fetches, 8);
        assert_eq!(config.http.timeout_secs, 3);
        assert!(config.no_cache);
    }
}
