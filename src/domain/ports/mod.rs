mod cache_index_port;
mod cache_storage_port;
mod file_id_generator_port;
mod image_downloader_port;
mod url_source_port;

pub use cache_index_port::CacheIndexPort;
pub use cache_storage_port::CacheStoragePort;
pub use file_id_generator_port::FileIdGenerator;
pub use image_downloader_port::ImageDownloaderPort;
pub use url_source_port::UrlSourcePort;

#[cfg(test)]
pub use url_source_port::MockUrlSourcePort;
