//! Cache index persistence error types.

use thiserror::Error;

/// Failures of the persisted url -> file id store.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PersistenceError {
    #[error("failed to read cache index: {message}")]
    ReadFailed { message: String },

    #[error("failed to write cache index: {message}")]
    WriteFailed { message: String },
}

impl PersistenceError {
    /// Creates read failed error.
    #[must_use]
    pub fn read_failed(message: impl Into<String>) -> Self {
        Self::ReadFailed {
            message: message.into(),
        }
    }

    /// Creates write failed error.
    #[must_use]
    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::WriteFailed {
            message: message.into(),
        }
    }
}
