//! Cache index persisted as a TOML document.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::entities::FileId;
use crate::domain::errors::PersistenceError;
use crate::domain::ports::CacheIndexPort;
use crate::infrastructure::atomic_write::write_atomically;

const INDEX_FILE_NAME: &str = "cache_index.toml";

/// On-disk layout: a single `[entries]` table of `"<url>" = "<file id>"`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct IndexDocument {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Durable url -> file id mapping.
///
/// Lookups are served from memory. Every `put` rewrites the whole document
/// atomically and only then becomes visible to `get`.
pub struct TomlCacheIndex {
    path: PathBuf,
    entries: RwLock<HashMap<String, FileId>>,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for TomlCacheIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TomlCacheIndex")
            .field("path", &self.path)
            .field("len", &self.len())
            .finish()
    }
}

impl TomlCacheIndex {
    /// Loads the index at `path`.
    ///
    /// A missing file yields an empty index. A malformed file is logged and
    /// treated as empty; it is replaced on the next successful `put`.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read.
    pub async fn open(path: PathBuf) -> Result<Self, PersistenceError> {
        let document = match fs::read_to_string(&path).await {
            Ok(content) => match toml::from_str::<IndexDocument>(&content) {
                Ok(document) => document,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to parse cache index. Starting empty."
                    );
                    IndexDocument::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexDocument::default(),
            Err(e) => return Err(PersistenceError::read_failed(e.to_string())),
        };

        let entries: HashMap<String, FileId> = document
            .entries
            .into_iter()
            .map(|(url, id)| (url, FileId::new(id)))
            .collect();

        debug!(path = %path.display(), entries = entries.len(), "Loaded cache index");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
            write_lock: Mutex::new(()),
        })
    }

    /// Returns the platform location (`<data dir>/cache_index.toml`).
    #[must_use]
    pub fn default_location() -> Option<PathBuf> {
        crate::infrastructure::config::project_dirs()
            .map(|dirs| dirs.data_dir().join(INDEX_FILE_NAME))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &HashMap<String, FileId>) -> Result<(), PersistenceError> {
        let document = IndexDocument {
            entries: entries
                .iter()
                .map(|(url, id)| (url.clone(), id.as_str().to_owned()))
                .collect(),
        };
        let content = toml::to_string_pretty(&document)
            .map_err(|e| PersistenceError::write_failed(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::write_failed(e.to_string()))?;
        }

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, content.as_bytes()))
            .await
            .map_err(|e| PersistenceError::write_failed(format!("write task panicked: {e}")))?
            .map_err(|e| PersistenceError::write_failed(e.to_string()))
    }
}

#[async_trait]
impl CacheIndexPort for TomlCacheIndex {
    async fn get(&self, url: &str) -> Option<FileId> {
        self.entries.read().get(url).cloned()
    }

    async fn put(&self, url: &str, file_id: FileId) -> Result<(), PersistenceError> {
        let _guard = self.write_lock.lock().await;

        let mut candidate = self.entries.read().clone();
        candidate.insert(url.to_string(), file_id);

        self.persist(&candidate).await?;

        *self.entries.write() = candidate;
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
