use super::app_config::AppConfig;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::infrastructure::atomic_write::write_atomically;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration loading errors.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Reads and writes `config.toml`.
pub struct ConfigStorage {
    config_dir: PathBuf,
}

impl ConfigStorage {
    /// Create a new `ConfigStorage` in the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = super::project_dirs()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `ConfigStorage` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the config file path: `path_override` or `config.toml` in
    /// the config directory.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Reads the configuration file. A missing file is seeded with the
    /// defaults; a file that is not valid TOML is left alone and the
    /// defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read, or the
    /// defaults cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = self.config_path(path_override);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let defaults = AppConfig::default();
                Self::write_config(&path, &defaults)?;
                info!(path = %path.display(), "Wrote default configuration");
                return Ok(defaults);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Ignoring malformed configuration");
            AppConfig::default()
        }))
    }

    fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        write_atomically(path, toml::to_string_pretty(config)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = ConfigStorage::with_dir(dir.path().join("picture-cache"));

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.max_concurrent_fetches, AppConfig::default().max_concurrent_fetches);

        assert!(manager.config_path(None).exists());

        let reloaded = manager.load_config(None).unwrap();
        assert_eq!(reloaded.source_url, config.source_url);
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = ConfigStorage::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "invalid_toml = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.http.timeout_secs, 30);
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "invalid_toml = [");
    }

    #[test]
    fn test_load_config_from_override() {
        let dir = tempdir().unwrap();
        let manager = ConfigStorage::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "max_concurrent_fetches = 2\n").unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();
        assert_eq!(config.max_concurrent_fetches, 2);
        assert!(!manager.config_dir().exists());
    }

    #[test]
    fn test_load_config_rejects_unreadable_path() {
        let dir = tempdir().unwrap();
        let manager = ConfigStorage::with_dir(dir.path().to_path_buf());
        fs::create_dir(manager.config_path(None)).unwrap();

        assert!(matches!(manager.load_config(None), Err(ConfigError::Io(_))));
    }
}
