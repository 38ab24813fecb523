//! Domain error types.

mod fetch_error;
mod persistence_error;
mod storage_error;
mod transport_error;

pub use fetch_error::FetchError;
pub use persistence_error::PersistenceError;
pub use storage_error::StorageError;
pub use transport_error::TransportError;
