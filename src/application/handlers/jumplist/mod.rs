//! Jump list handlers.
//!
//! Add and remove mutate the session store first and then rebuild the jump
//! list from it. A failed mutation clears the list instead, since the
//! platform offers no partial update to fall back on.

mod add_session;
mod recent_sessions;
mod remove_session;
mod sync_error;
mod synchronizer;

pub use add_session::{AddSessionCommand, AddSessionHandler};
pub use recent_sessions::RecentSessionsJumpList;
pub use remove_session::{RemoveSessionCommand, RemoveSessionHandler};
pub use sync_error::{StoreMutation, SyncError};
pub use synchronizer::{JumpListSynchronizer, SyncOperation, SyncReport};

/// Result of one public jump list operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The store changed and the list was rebuilt from it.
    Rebuilt(SyncReport),
    /// An explicit clear.
    Cleared(SyncReport),
    /// The store mutation failed, so the list was cleared instead.
    FailSafeCleared { cause: SyncError, report: SyncReport },
}

impl SyncOutcome {
    /// Report of the rebuild or clear that ran.
    pub fn report(&self) -> &SyncReport {
        match self {
            SyncOutcome::Rebuilt(report)
            | SyncOutcome::Cleared(report)
            | SyncOutcome::FailSafeCleared { report, .. } => report,
        }
    }

    pub fn is_fail_safe(&self) -> bool {
        matches!(self, SyncOutcome::FailSafeCleared { .. })
    }
}
