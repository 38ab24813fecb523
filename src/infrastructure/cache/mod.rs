//! On-disk image cache: content files plus the url -> file id index.

mod cache_directory;
mod memory_index;
mod toml_index;
mod uuid_file_ids;

pub use cache_directory::CacheDirectory;
pub use memory_index::MemoryCacheIndex;
pub use toml_index::TomlCacheIndex;
pub use uuid_file_ids::UuidFileIds;
