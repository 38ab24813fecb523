//! Cache index port definition.

use async_trait::async_trait;

use crate::domain::entities::FileId;
use crate::domain::errors::PersistenceError;

/// Port for the durable url -> file id mapping.
#[async_trait]
pub trait CacheIndexPort: Send + Sync {
    /// Returns the file id recorded for `url`, if any.
    async fn get(&self, url: &str) -> Option<FileId>;

    /// Records or overwrites the file id for `url`.
    ///
    /// On error nothing is recorded.
    async fn put(&self, url: &str, file_id: FileId) -> Result<(), PersistenceError>;

    /// Returns the number of recorded entries.
    fn len(&self) -> usize;

    /// Returns true if nothing is recorded.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
