//! File-based Session List Store Adapter
//!
//! Stores the recent session list as a YAML document on disk:
//!
//! ```text
//! sessions:
//!   - core-router
//!   - lab switch 2
//! ```
//!
//! A missing file reads as an empty list. Every change rewrites the whole
//! document atomically.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use super::recent_list::{promote, remove_all};
use crate::adapters::atomic_write::write_atomically;
use crate::domain::foundation::SessionName;
use crate::ports::{SessionListStore, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSessionList {
    #[serde(default)]
    sessions: Vec<SessionName>,
}

/// File-backed recent session list, newest first.
#[derive(Debug)]
pub struct FileSessionListStore {
    path: PathBuf,
    retention: Option<usize>,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileSessionListStore {
    /// Create a store backed by the YAML file at `path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionListStore::new("./data/recent-sessions.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            retention: None,
            write_lock: Mutex::new(()),
        }
    }

    /// Keep at most `max` names; older entries fall off the end on `add`
    pub fn with_retention(mut self, max: Option<usize>) -> Self {
        self.retention = max;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<StoredSessionList, StoreError> {
        if !self.path.exists() {
            return Ok(StoredSessionList::default());
        }

        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::IoError(format!("{}: {}", self.path.display(), e)))?;

        if yaml.trim().is_empty() {
            return Ok(StoredSessionList::default());
        }

        serde_yaml::from_str(&yaml)
            .map_err(|e| StoreError::DeserializationFailed(format!("{}: {}", self.path.display(), e)))
    }

    async fn save(&self, list: &StoredSessionList) -> Result<(), StoreError> {
        let yaml = serde_yaml::to_string(list)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        write_atomically(&self.path, yaml.as_bytes())
            .await
            .map_err(|e| StoreError::IoError(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl SessionListStore for FileSessionListStore {
    async fn add(&self, name: &SessionName) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut list = self.load().await?;
        promote(&mut list.sessions, name, self.retention);
        self.save(&list).await
    }

    async fn remove(&self, name: &SessionName) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut list = self.load().await?;
        if remove_all(&mut list.sessions, name) == 0 {
            return Ok(());
        }
        self.save(&list).await
    }

    async fn list(&self) -> Result<Vec<SessionName>, StoreError> {
        Ok(self.load().await?.sessions)
    }
}
