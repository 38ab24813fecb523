//! Port definition for cached file contents.

use async_trait::async_trait;

use crate::domain::entities::FileId;
use crate::domain::errors::StorageError;

/// Port for reading and writing content files named by [`FileId`].
#[async_trait]
pub trait CacheStoragePort: Send + Sync {
    /// Checks whether a file exists for `file_id`.
    async fn exists(&self, file_id: &FileId) -> bool;

    /// Reads the full contents of the file.
    async fn read(&self, file_id: &FileId) -> Result<Vec<u8>, StorageError>;

    /// Creates (or truncates) the file and writes `bytes` to it.
    async fn write(&self, file_id: &FileId, bytes: &[u8]) -> Result<(), StorageError>;
}

/// Test double for [`CacheStoragePort`].
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use parking_lot::RwLock;

    /// In-memory storage with switchable write failures.
    #[derive(Default)]
    pub struct MockCacheStorage {
        files: RwLock<HashMap<FileId, Vec<u8>>>,
        fail_writes: AtomicBool,
        writes: AtomicUsize,
    }

    impl MockCacheStorage {
        /// Creates empty storage.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates storage whose every write fails.
        pub fn failing_writes() -> Self {
            let storage = Self::default();
            storage.fail_writes.store(true, Ordering::SeqCst);
            storage
        }

        /// Seeds a file without counting a write.
        pub fn insert(&self, file_id: FileId, bytes: Vec<u8>) {
            self.files.write().insert(file_id, bytes);
        }

        /// Returns the stored bytes for `file_id`.
        pub fn contents(&self, file_id: &FileId) -> Option<Vec<u8>> {
            self.files.read().get(file_id).cloned()
        }

        /// Number of stored files.
        pub fn file_count(&self) -> usize {
            self.files.read().len()
        }

        /// Number of write calls, failed ones included.
        pub fn write_attempts(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CacheStoragePort for MockCacheStorage {
        async fn exists(&self, file_id: &FileId) -> bool {
            self.files.read().contains_key(file_id)
        }

        async fn read(&self, file_id: &FileId) -> Result<Vec<u8>, StorageError> {
            self.files.read().get(file_id).cloned().ok_or_else(|| {
                StorageError::Read(std::io::Error::from(std::io::ErrorKind::NotFound))
            })
        }

        async fn write(&self, file_id: &FileId, bytes: &[u8]) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Write(std::io::Error::other("disk full")));
            }
            self.files.write().insert(file_id.clone(), bytes.to_vec());
            Ok(())
        }
    }
}
