use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::entities::FileId;
use crate::domain::errors::PersistenceError;
use crate::domain::ports::CacheIndexPort;

/// Process-local index, used when nothing can be persisted.
#[derive(Debug, Default)]
pub struct MemoryCacheIndex {
    entries: RwLock<HashMap<String, FileId>>,
}

impl MemoryCacheIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheIndexPort for MemoryCacheIndex {
    async fn get(&self, url: &str) -> Option<FileId> {
        self.entries.read().get(url).cloned()
    }

    async fn put(&self, url: &str, file_id: FileId) -> Result<(), PersistenceError> {
        self.entries.write().insert(url.to_string(), file_id);
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
