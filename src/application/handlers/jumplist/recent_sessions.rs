//! RecentSessionsJumpList - the surface the host application calls.

use std::sync::Arc;

use super::add_session::{AddSessionCommand, AddSessionHandler};
use super::remove_session::{RemoveSessionCommand, RemoveSessionHandler};
use super::synchronizer::{JumpListSynchronizer, SyncReport};
use super::SyncOutcome;
use crate::domain::foundation::SessionName;
use crate::ports::{ExecutableLocator, JumpListSink, SessionCatalog, SessionListStore};

/// Keeps the taskbar jump list in step with the recent session list.
///
/// Every call runs to completion and reports what happened; none of them
/// fail. Callers are expected to serialize calls.
///
/// # Example
///
/// ```ignore
/// let jump_list = RecentSessionsJumpList::new(store, catalog, sink, locator);
/// jump_list.add_session_to_list(&SessionName::new("core-router")?).await;
/// ```
pub struct RecentSessionsJumpList {
    add: AddSessionHandler,
    remove: RemoveSessionHandler,
    synchronizer: Arc<JumpListSynchronizer>,
}

impl RecentSessionsJumpList {
    pub fn new(
        store: Arc<dyn SessionListStore>,
        catalog: Arc<dyn SessionCatalog>,
        sink: Arc<dyn JumpListSink>,
        locator: Arc<dyn ExecutableLocator>,
    ) -> Self {
        let synchronizer = Arc::new(JumpListSynchronizer::new(
            Arc::clone(&store),
            catalog,
            sink,
            locator,
        ));
        Self {
            add: AddSessionHandler::new(Arc::clone(&store), Arc::clone(&synchronizer)),
            remove: RemoveSessionHandler::new(store, Arc::clone(&synchronizer)),
            synchronizer,
        }
    }

    /// Record `name` as recently used, then rebuild; clears on store failure.
    pub async fn add_session_to_list(&self, name: &SessionName) -> SyncOutcome {
        self.add
            .handle(AddSessionCommand { name: name.clone() })
            .await
    }

    /// Forget `name`, then rebuild; clears on store failure.
    pub async fn remove_session_from_list(&self, name: &SessionName) -> SyncOutcome {
        self.remove
            .handle(RemoveSessionCommand { name: name.clone() })
            .await
    }

    /// Show no recent sessions. The store is left untouched.
    pub async fn clear_list(&self) -> SyncOutcome {
        SyncOutcome::Cleared(self.synchronizer.clear().await)
    }

    /// Replay the store into the jump list without changing it.
    pub async fn rebuild(&self) -> SyncReport {
        self.synchronizer.rebuild().await
    }
}
