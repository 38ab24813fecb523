//! Application layer with services and use cases.

/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{ImageCacheService, UrlExtractor};
pub use use_cases::{DEFAULT_MAX_CONCURRENT_FETCHES, LoadGalleryUseCase};
