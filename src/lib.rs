//! picture-cache - A disk-backed image cache with network fallback.
//!
//! Images are requested by URL. Each request is answered from a local cache
//! directory when a previous download was persisted, and from the network
//! otherwise, after which the bytes are written to disk for next time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

#[cfg(test)]
mod test_support;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "picture-cache";
