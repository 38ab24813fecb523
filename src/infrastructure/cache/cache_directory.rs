//! Directory of raw downloaded image files, one file per [`FileId`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, trace, warn};

use crate::domain::entities::FileId;
use crate::domain::errors::StorageError;
use crate::domain::ports::CacheStoragePort;

const CACHE_SUBDIRECTORY: &str = "image_cache";

/// Disk storage for cached image bytes.
///
/// Files hold the downloaded payload verbatim and are named by file id,
/// without extension.
#[derive(Debug, Clone)]
pub struct CacheDirectory {
    root: PathBuf,
}

impl CacheDirectory {
    /// Creates the directory (and parents) if absent.
    ///
    /// # Errors
    /// Returns error if the directory cannot be created.
    pub async fn bootstrap(root: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&root).await.map_err(StorageError::CreateDir)?;
        info!(path = %root.display(), "Cache directory ready");
        Ok(Self { root })
    }

    /// Bootstraps `root`, or returns `None` when there is no usable location.
    ///
    /// Callers treat `None` as network-only mode.
    pub async fn bootstrap_or_disable(root: Option<PathBuf>) -> Option<Self> {
        let Some(root) = root else {
            warn!("Failed to determine cache directory");
            return None;
        };

        match Self::bootstrap(root.clone()).await {
            Ok(dir) => Some(dir),
            Err(e) => {
                warn!(path = %root.display(), error = %e, "Cache directory unavailable");
                None
            }
        }
    }

    /// Returns the platform cache location (`<cache dir>/image_cache`).
    #[must_use]
    pub fn default_location() -> Option<PathBuf> {
        crate::infrastructure::config::project_dirs()
            .map(|dirs| dirs.cache_dir().join(CACHE_SUBDIRECTORY))
    }

    /// Returns the directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, file_id: &FileId) -> Result<PathBuf, StorageError> {
        if !file_id.is_plain_file_name() {
            return Err(StorageError::InvalidFileId(file_id.to_string()));
        }
        Ok(self.root.join(file_id.as_str()))
    }
}

#[async_trait]
impl CacheStoragePort for CacheDirectory {
    async fn exists(&self, file_id: &FileId) -> bool {
        let Ok(path) = self.file_path(file_id) else {
            warn!(file_id = %file_id, "Ignoring malformed file id");
            return false;
        };
        fs::try_exists(&path).await.unwrap_or(false)
    }

    async fn read(&self, file_id: &FileId) -> Result<Vec<u8>, StorageError> {
        let path = self.file_path(file_id)?;
        let bytes = fs::read(&path).await.map_err(StorageError::Read)?;
        trace!(file_id = %file_id, size = bytes.len(), "Read cache file");
        Ok(bytes)
    }

    async fn write(&self, file_id: &FileId, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.file_path(file_id)?;

        let mut file = fs::File::create(&path).await.map_err(StorageError::Write)?;
        file.write_all(bytes).await.map_err(StorageError::Write)?;
        file.flush().await.map_err(StorageError::Write)?;

        debug!(
            file_id = %file_id,
            path = %path.display(),
            size = bytes.len(),
            "Stored image in cache directory"
        );
        Ok(())
    }
}
