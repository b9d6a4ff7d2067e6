//! Failure taxonomy of a synchronization cycle.

use thiserror::Error;

use crate::domain::foundation::SessionName;
use crate::ports::{SinkError, StoreError};

/// Which store mutation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMutation {
    Add,
    Remove,
}

impl std::fmt::Display for StoreMutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreMutation::Add => f.write_str("add"),
            StoreMutation::Remove => f.write_str("remove"),
        }
    }
}

/// Everything that can go wrong while keeping the jump list in sync.
///
/// None of these reach the end user. `EntryInvalid` and
/// `DescriptorConstructionFailure` only drop one entry, `StoreMutationFailure`
/// triggers a fail-safe clear, and `SinkUnavailable` abandons the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("Could not {operation} session '{name}' in the store: {source}")]
    StoreMutationFailure {
        operation: StoreMutation,
        name: SessionName,
        #[source]
        source: StoreError,
    },

    #[error("Could not read the recent session list: {0}")]
    StoreReadFailure(#[source] StoreError),

    #[error("Jump list sink unavailable: {0}")]
    SinkUnavailable(#[source] SinkError),

    #[error("Session '{0}' has no saved configuration")]
    EntryInvalid(SessionName),

    #[error("Could not build shortcut for session '{name}': {source}")]
    DescriptorConstructionFailure {
        name: SessionName,
        #[source]
        source: SinkError,
    },
}
