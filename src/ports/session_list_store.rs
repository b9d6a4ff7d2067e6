//! Session List Store Port - the authoritative ordered list of recent sessions.
//!
//! The platform jump list cannot be read back, so this store is the only
//! record of what the list should contain. Every rebuild replays it.

use async_trait::async_trait;

use crate::domain::foundation::SessionName;

/// Errors that can occur during session list store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize session list: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session list: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Store rejected the change: {0}")]
    Rejected(String),
}

/// Port for the persisted, ordered list of session names.
///
/// No capacity limit is assumed at this layer. Whether an implementation
/// deduplicates, reorders or caps is its own business; callers only look
/// at success or failure.
#[async_trait]
pub trait SessionListStore: Send + Sync {
    /// Record a session as recently used.
    ///
    /// # Errors
    /// Returns `StoreError` if the change could not be persisted
    async fn add(&self, name: &SessionName) -> Result<(), StoreError>;

    /// Remove every entry exactly matching `name`.
    ///
    /// # Errors
    /// Returns `StoreError` if the change could not be persisted
    async fn remove(&self, name: &SessionName) -> Result<(), StoreError>;

    /// Full list in stored order.
    async fn list(&self) -> Result<Vec<SessionName>, StoreError>;
}
