//! Application services.

mod image_cache_service;
mod url_extractor;

pub use image_cache_service::ImageCacheService;
pub use url_extractor::UrlExtractor;
