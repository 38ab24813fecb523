//! Errors surfaced by image fetches.

use thiserror::Error;

use super::TransportError;

/// Failure of a single `fetch_image` call.
///
/// Only network and decode failures reach the caller; persistence problems
/// degrade caching but never fail a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    #[error("downloaded bytes are not a valid image: {message}")]
    Decode { message: String },
}

impl FetchError {
    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns whether the failure came from the network layer.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
