//! Gallery bootstrap: URL list first, then every image through the cache.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::application::services::ImageCacheService;
use crate::domain::entities::LoadedImage;
use crate::domain::errors::TransportError;
use crate::domain::ports::UrlSourcePort;

/// Default number of images fetched at the same time.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;

/// Loads every image named by the URL source.
#[derive(Clone)]
pub struct LoadGalleryUseCase {
    url_source: Arc<dyn UrlSourcePort>,
    images: Arc<ImageCacheService>,
    max_concurrent: usize,
}

impl LoadGalleryUseCase {
    /// Creates new gallery use case.
    #[must_use]
    pub fn new(
        url_source: Arc<dyn UrlSourcePort>,
        images: Arc<ImageCacheService>,
        max_concurrent: usize,
    ) -> Self {
        Self {
            url_source,
            images,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Fetches the URL list and loads each image.
    ///
    /// Images that fail to load are dropped; the rest keep the order of the
    /// URL list.
    ///
    /// # Errors
    /// Returns error if the URL list itself cannot be fetched or is empty.
    pub async fn execute(&self) -> Result<Vec<LoadedImage>, TransportError> {
        let urls = self.url_source.fetch_urls().await.map_err(|e| {
            warn!(error = %e, "Failed to fetch image URL list");
            e
        })?;

        info!(count = urls.len(), "Fetched image URL list");

        let images = &self.images;
        let results: Vec<_> = stream::iter(urls)
            .map(|url| async move {
                let result = images.fetch_image(&url).await;
                (url, result)
            })
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let mut loaded = Vec::with_capacity(results.len());
        for (url, result) in results {
            match result {
                Ok(image) => {
                    debug!(url = %url, source = %image.source, "Image ready");
                    loaded.push(image);
                }
                Err(e) => warn!(url = %url, error = %e, "Dropping image that failed to load"),
            }
        }

        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUrlSourcePort;
    use crate::domain::ports::mocks::{MockCacheStorage, MockImageDownloader, SequentialFileIds};
    use crate::infrastructure::cache::MemoryCacheIndex;
    use crate::test_support::png_bytes;

    fn service(downloader: MockImageDownloader) -> Arc<ImageCacheService> {
        Arc::new(ImageCacheService::new(
            Arc::new(downloader),
            Arc::new(MemoryCacheIndex::new()),
            Some(Arc::new(MockCacheStorage::new())),
            Arc::new(SequentialFileIds::default()),
        ))
    }

    #[tokio::test]
    async fn test_failed_images_are_dropped() {
        let mut source = MockUrlSourcePort::new();
        source.expect_fetch_urls().times(1).returning(|| {
            Ok(vec![
                "https://a.com/1.png".to_string(),
                "https://a.com/broken.png".to_string(),
                "https://a.com/3.png".to_string(),
            ])
        });

        let downloader = MockImageDownloader::new()
            .with_response("https://a.com/1.png", png_bytes(1, 1, [0, 0, 0]))
            .with_response("https://a.com/broken.png", &b"garbage"[..])
            .with_response("https://a.com/3.png", png_bytes(3, 1, [0, 0, 0]));

        let use_case = LoadGalleryUseCase::new(Arc::new(source), service(downloader), 2);
        let gallery = use_case.execute().await.unwrap();

        let urls: Vec<_> = gallery.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.com/1.png", "https://a.com/3.png"]);
        assert_eq!(gallery[1].image.width(), 3);
    }

    #[tokio::test]
    async fn test_url_list_failure_is_returned() {
        let mut source = MockUrlSourcePort::new();
        source
            .expect_fetch_urls()
            .returning(|| Err(TransportError::NoData));

        let use_case =
            LoadGalleryUseCase::new(Arc::new(source), service(MockImageDownloader::new()), 4);

        assert_eq!(use_case.execute().await.unwrap_err(), TransportError::NoData);
    }

    #[tokio::test]
    async fn test_all_failures_yield_empty_gallery() {
        let mut source = MockUrlSourcePort::new();
        source
            .expect_fetch_urls()
            .returning(|| Ok(vec!["https://a.com/missing.png".to_string()]));

        let use_case =
            LoadGalleryUseCase::new(Arc::new(source), service(MockImageDownloader::new()), 0);

        assert!(use_case.execute().await.unwrap().is_empty());
    }
}
