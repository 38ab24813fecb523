//! Network transport error types.

use thiserror::Error;

/// Failures reported by the network collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The URL could not be parsed as an absolute http(s) URL.
    #[error("invalid url")]
    InvalidUrl,

    /// Non-2xx status, or the response URL differs from the requested one.
    #[error("invalid response status")]
    InvalidResponseStatus,

    /// The response carried no usable payload.
    #[error("no data")]
    NoData,

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Creates a transport error from any displayable cause.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
