//! In-Memory Session List Store Adapter
//!
//! Keeps the recent session list in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::recent_list::{promote, remove_all};
use crate::domain::foundation::SessionName;
use crate::ports::{SessionListStore, StoreError};

/// In-memory recent session list, newest first.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionListStore {
    sessions: Arc<RwLock<Vec<SessionName>>>,
    retention: Option<usize>,
    reject_changes: Arc<AtomicBool>,
}

impl InMemorySessionListStore {
    /// Create an empty, unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that keeps at most `max` names
    pub fn with_retention(max: usize) -> Self {
        Self {
            retention: Some(max),
            ..Self::default()
        }
    }

    /// Create a store pre-filled with `names` in the given order
    pub fn with_sessions(names: Vec<SessionName>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(names)),
            ..Self::default()
        }
    }

    /// Make every subsequent `add`/`remove` fail without touching the list
    pub fn reject_changes(&self, reject: bool) {
        self.reject_changes.store(reject, Ordering::SeqCst);
    }

    /// Number of stored names
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.reject_changes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("store is read-only".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionListStore for InMemorySessionListStore {
    async fn add(&self, name: &SessionName) -> Result<(), StoreError> {
        self.check_writable()?;
        let mut sessions = self.sessions.write().await;
        promote(&mut sessions, name, self.retention);
        Ok(())
    }

    async fn remove(&self, name: &SessionName) -> Result<(), StoreError> {
        self.check_writable()?;
        let mut sessions = self.sessions.write().await;
        remove_all(&mut sessions, name);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SessionName>, StoreError> {
        Ok(self.sessions.read().await.clone())
    }
}
