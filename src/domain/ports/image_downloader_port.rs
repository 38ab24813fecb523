//! Image download port definition.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::errors::TransportError;

/// Port for downloading the raw bytes behind a URL.
#[async_trait]
pub trait ImageDownloaderPort: Send + Sync {
    /// Downloads `url`.
    ///
    /// Succeeds only for a 2xx response with a non-empty body.
    async fn download(&self, url: &str) -> Result<Bytes, TransportError>;
}
