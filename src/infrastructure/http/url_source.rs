//! Remote text resource listing the image URLs.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use super::{check_status, parse_http_url, transport_failure};
use crate::application::services::UrlExtractor;
use crate::domain::errors::TransportError;
use crate::domain::ports::UrlSourcePort;

/// Default location of the URL list.
pub const DEFAULT_SOURCE_URL: &str = "https://files.apkcdn.com/images.txt";

/// Fetches a text document and extracts every link in it.
#[derive(Debug, Clone)]
pub struct HttpUrlSource {
    client: Client,
    source_url: String,
}

impl HttpUrlSource {
    /// Creates a source reading `source_url`.
    #[must_use]
    pub fn new(client: Client, source_url: impl Into<String>) -> Self {
        Self {
            client,
            source_url: source_url.into(),
        }
    }
}

/// Extracts the URL list from a response body.
fn urls_from_body(body: &[u8]) -> Result<Vec<String>, TransportError> {
    let text = std::str::from_utf8(body).map_err(|_| TransportError::NoData)?;
    let urls = UrlExtractor::extract_urls(text);
    if urls.is_empty() {
        return Err(TransportError::NoData);
    }
    Ok(urls)
}

#[async_trait]
impl UrlSourcePort for HttpUrlSource {
    async fn fetch_urls(&self) -> Result<Vec<String>, TransportError> {
        let url = parse_http_url(&self.source_url)?;

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "URL list request failed");
            transport_failure(&e)
        })?;

        let status = response.status();
        check_status(status).inspect_err(|_| {
            warn!(url = %url, status = %status, "Unexpected URL list response status");
        })?;

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::other(format!("failed to read body: {e}")))?;

        let urls = urls_from_body(&body)?;
        info!(count = urls.len(), "Successfully downloaded URLs");
        Ok(urls)
    }
}
