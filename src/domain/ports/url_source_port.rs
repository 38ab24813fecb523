//! URL list source port definition.

use async_trait::async_trait;

use crate::domain::errors::TransportError;

/// Port yielding the URLs of the images to show.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSourcePort: Send + Sync {
    /// Fetches the current list of image URLs.
    ///
    /// An empty list is reported as [`TransportError::NoData`].
    async fn fetch_urls(&self) -> Result<Vec<String>, TransportError>;
}
