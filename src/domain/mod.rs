//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{FileId, Image, ImageSource, LoadedImage};
pub use errors::{FetchError, PersistenceError, StorageError, TransportError};
pub use ports::{
    CacheIndexPort, CacheStoragePort, FileIdGenerator, ImageDownloaderPort, UrlSourcePort,
};
