//! Cache directory error types.

use thiserror::Error;

/// Filesystem failures inside the cache directory.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("failed to create cache directory: {0}")]
    CreateDir(#[source] std::io::Error),

    #[error("failed to read cache file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write cache file: {0}")]
    Write(#[source] std::io::Error),

    #[error("file id is not a valid file name: {0}")]
    InvalidFileId(String),
}
