//! Application configuration.

/// Configuration file schema.
pub mod app_config;
/// Command-line flags.
pub mod args;
/// Loading and saving `config.toml`.
pub mod storage;

pub use app_config::{AppConfig, HttpConfig, LogLevel};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigStorage};

use directories::ProjectDirs;

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";
const APP_NAME: &str = "picture-cache";

/// Returns the platform directories for this application, if the home
/// directory can be determined.
#[must_use]
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
}
