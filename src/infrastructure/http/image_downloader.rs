//! Image byte downloads over HTTP.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::{check_status, parse_http_url, transport_failure};
use crate::domain::errors::TransportError;
use crate::domain::ports::ImageDownloaderPort;

/// Downloads raw image bytes with reqwest.
#[derive(Debug, Clone)]
pub struct HttpImageDownloader {
    client: Client,
}

impl HttpImageDownloader {
    /// Creates a downloader on top of a shared client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Rejects responses that were redirected away from the requested URL.
fn check_final_url(requested: &Url, final_url: &Url) -> Result<(), TransportError> {
    if requested == final_url {
        Ok(())
    } else {
        Err(TransportError::InvalidResponseStatus)
    }
}

#[async_trait]
impl ImageDownloaderPort for HttpImageDownloader {
    async fn download(&self, url: &str) -> Result<Bytes, TransportError> {
        let requested = parse_http_url(url)?;

        debug!(url = %requested, "Downloading image from network");

        let response = self
            .client
            .get(requested.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(url = %requested, error = %e, "Image request failed");
                transport_failure(&e)
            })?;

        let status = response.status();
        check_status(status).inspect_err(|_| {
            warn!(url = %requested, status = %status, "Unexpected image response status");
        })?;
        check_final_url(&requested, response.url()).inspect_err(|_| {
            warn!(url = %requested, final_url = %response.url(), "Image request was redirected");
        })?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::other(format!("failed to read body: {e}")))?;

        if bytes.is_empty() {
            return Err(TransportError::NoData);
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::{DEFAULT_USER_AGENT, build_client};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `response` to a single connection and returns the image URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/a.png")
    }

    fn downloader() -> HttpImageDownloader {
        HttpImageDownloader::new(build_client(5, DEFAULT_USER_AGENT).unwrap())
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_same_url_is_accepted() {
        let requested = url("https://example.com/a.png");
        assert!(check_final_url(&requested, &url("https://example.com/a.png")).is_ok());
    }

    #[test]
    fn test_redirected_url_is_rejected() {
        let requested = url("https://example.com/a.png");
        assert_eq!(
            check_final_url(&requested, &url("https://cdn.example.com/a.png")),
            Err(TransportError::InvalidResponseStatus)
        );
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_request() {
        let client = build_client(1, DEFAULT_USER_AGENT).unwrap();
        let downloader = HttpImageDownloader::new(client);

        let result = downloader.download("not a url").await;
        assert_eq!(result, Err(TransportError::InvalidUrl));
    }

    #[tokio::test]
    async fn test_download_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 3\r\nConnection: close\r\n\r\nabc",
        )
        .await;

        let bytes = downloader().download(&url).await.unwrap();
        assert_eq!(bytes.as_ref(), b"abc");
    }

    #[tokio::test]
    async fn test_empty_body_is_no_data() {
        let url =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await;

        let result = downloader().download(&url).await;
        assert_eq!(result, Err(TransportError::NoData));
    }

    #[tokio::test]
    async fn test_not_found_is_invalid_status() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 4\r\nConnection: close\r\n\r\nnope",
        )
        .await;

        let result = downloader().download(&url).await;
        assert_eq!(result, Err(TransportError::InvalidResponseStatus));
    }

    #[tokio::test]
    async fn test_refused_connection_is_other() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = downloader().download(&format!("http://{addr}/a.png")).await;
        assert!(matches!(result, Err(TransportError::Other(_))), "{result:?}");
    }
}
