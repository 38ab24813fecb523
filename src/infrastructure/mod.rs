//! Infrastructure layer with external service adapters.

mod atomic_write;
/// On-disk image cache.
pub mod cache;
/// Application configuration.
pub mod config;
/// HTTP adapters.
pub mod http;

pub use cache::{CacheDirectory, MemoryCacheIndex, TomlCacheIndex, UuidFileIds};
pub use config::{AppConfig, CliArgs, ConfigStorage, LogLevel};
pub use http::{HttpImageDownloader, HttpUrlSource, build_client};
