//! Read-through image cache: disk first, network on any miss.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{FileId, Image, ImageSource, LoadedImage};
use crate::domain::errors::FetchError;
use crate::domain::ports::{CacheIndexPort, CacheStoragePort, FileIdGenerator, ImageDownloaderPort};

/// Serves images by URL from the on-disk cache, downloading and persisting
/// them on a miss.
///
/// Concurrent fetches of the same URL are not coalesced: each may download
/// and write its own file, and the last index update wins.
pub struct ImageCacheService {
    downloader: Arc<dyn ImageDownloaderPort>,
    index: Arc<dyn CacheIndexPort>,
    storage: Option<Arc<dyn CacheStoragePort>>,
    id_generator: Arc<dyn FileIdGenerator>,
}

impl std::fmt::Debug for ImageCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCacheService")
            .field("persistent", &self.is_persistent())
            .field("indexed", &self.index.len())
            .finish_non_exhaustive()
    }
}

impl ImageCacheService {
    /// Creates a new service.
    ///
    /// Without `storage` the service runs network-only: every fetch downloads
    /// and nothing is persisted.
    #[must_use]
    pub fn new(
        downloader: Arc<dyn ImageDownloaderPort>,
        index: Arc<dyn CacheIndexPort>,
        storage: Option<Arc<dyn CacheStoragePort>>,
        id_generator: Arc<dyn FileIdGenerator>,
    ) -> Self {
        if storage.is_none() {
            warn!("No cache directory available, images will not be persisted");
        }
        Self {
            downloader,
            index,
            storage,
            id_generator,
        }
    }

    /// Returns true if downloaded images are written to disk.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Returns the image for `url`, from disk when possible.
    ///
    /// # Errors
    /// Returns [`FetchError::Network`] if the download fails and
    /// [`FetchError::Decode`] if the downloaded bytes are not an image.
    /// Cache read and write problems never fail the fetch.
    pub async fn fetch_image(&self, url: &str) -> Result<LoadedImage, FetchError> {
        if let Some(image) = self.read_cached(url).await {
            info!(url = %url, "Image served from cache");
            return Ok(LoadedImage {
                url: url.to_string(),
                image,
                source: ImageSource::DiskCache,
            });
        }

        let bytes = self.downloader.download(url).await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to download image");
            FetchError::Network(e)
        })?;

        let image = decode(bytes.clone()).await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to decode downloaded image");
            FetchError::decode(e)
        })?;

        info!(url = %url, size = bytes.len(), "Downloaded image");

        self.persist(url, &bytes).await;

        Ok(LoadedImage {
            url: url.to_string(),
            image,
            source: ImageSource::Network,
        })
    }

    /// Looks the URL up in the index and decodes the cached file.
    ///
    /// Stale entries and undecodable files are left in place.
    async fn read_cached(&self, url: &str) -> Option<Image> {
        let file_id = self.index.get(url).await?;
        let storage = self.storage.as_ref()?;

        if !storage.exists(&file_id).await {
            debug!(url = %url, file_id = %file_id, "Indexed cache file is missing");
            return None;
        }

        let bytes = match storage.read(&file_id).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url = %url, file_id = %file_id, error = %e, "Failed to read cache file");
                return None;
            }
        };

        match decode(Bytes::from(bytes)).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!(url = %url, file_id = %file_id, error = %e, "Failed to decode cached image");
                None
            }
        }
    }

    /// Best-effort write of a fresh file followed by the index update.
    ///
    /// The index is only touched once the file is fully written.
    async fn persist(&self, url: &str, bytes: &[u8]) {
        let Some(storage) = &self.storage else {
            return;
        };

        let file_id: FileId = self.id_generator.generate();

        if let Err(e) = storage.write(&file_id, bytes).await {
            warn!(url = %url, file_id = %file_id, error = %e, "Failed to cache image to disk");
            return;
        }

        match self.index.put(url, file_id.clone()).await {
            Ok(()) => debug!(url = %url, file_id = %file_id, "Saved image to cache"),
            Err(e) => {
                error!(url = %url, file_id = %file_id, error = %e, "Failed to record cache entry");
            }
        }
    }
}

async fn decode(bytes: Bytes) -> Result<Image, String> {
    tokio::task::spawn_blocking(move || Image::decode(&bytes))
        .await
        .map_err(|e| format!("decode task panicked: {e}"))?
        .map_err(|e| e.to_string())
}
