use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "picture-cache",
    version,
    about = "Download a list of images, caching them on disk",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", env = "PICTURE_CACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// URL of the text document listing image URLs.
    #[arg(long, value_name = "URL", env = "PICTURE_CACHE_SOURCE_URL")]
    pub source_url: Option<String>,

    /// Directory holding cached image files.
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// File holding the url -> cached file index.
    #[arg(long, value_name = "PATH")]
    pub index_path: Option<PathBuf>,

    /// Do not read or write the disk cache.
    #[arg(long)]
    pub no_cache: bool,

    /// HTTP request timeout in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Maximum number of images fetched at the same time.
    #[arg(long, value_name = "N")]
    pub max_concurrent_fetches: Option<usize>,
}
