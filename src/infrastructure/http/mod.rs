//! HTTP adapters for the network collaborators.

mod image_downloader;
mod url_source;

pub use image_downloader::HttpImageDownloader;
pub use url_source::{DEFAULT_SOURCE_URL, HttpUrlSource};

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::domain::errors::TransportError;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("picture-cache/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client.
///
/// # Errors
/// Returns error if the TLS backend cannot be initialized.
pub fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, TransportError> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| TransportError::other(format!("failed to create HTTP client: {e}")))
}

/// Parses `url` as an absolute http(s) URL.
fn parse_http_url(url: &str) -> Result<Url, TransportError> {
    let parsed = Url::parse(url).map_err(|_| TransportError::InvalidUrl)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(TransportError::InvalidUrl),
    }
}

/// Maps a reqwest failure to a transport error.
fn transport_failure(e: &reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::other("request timed out")
    } else if e.is_connect() {
        TransportError::other(format!("failed to connect: {e}"))
    } else {
        TransportError::other(e.to_string())
    }
}

fn check_status(status: StatusCode) -> Result<(), TransportError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(TransportError::InvalidResponseStatus)
    }
}
