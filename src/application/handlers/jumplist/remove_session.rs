//! RemoveSessionHandler - drops a session from the recent list and resyncs.

use std::sync::Arc;

use tracing::warn;

use super::sync_error::{StoreMutation, SyncError};
use super::synchronizer::JumpListSynchronizer;
use super::SyncOutcome;
use crate::domain::foundation::SessionName;
use crate::ports::SessionListStore;

/// Command to remove a session from the recent list.
#[derive(Debug, Clone)]
pub struct RemoveSessionCommand {
    pub name: SessionName,
}

/// Handler for removing sessions.
pub struct RemoveSessionHandler {
    store: Arc<dyn SessionListStore>,
    synchronizer: Arc<JumpListSynchronizer>,
}

impl RemoveSessionHandler {
    pub fn new(store: Arc<dyn SessionListStore>, synchronizer: Arc<JumpListSynchronizer>) -> Self {
        Self {
            store,
            synchronizer,
        }
    }

    pub async fn handle(&self, cmd: RemoveSessionCommand) -> SyncOutcome {
        match self.store.remove(&cmd.name).await {
            Ok(()) => SyncOutcome::Rebuilt(self.synchronizer.rebuild().await),
            Err(e) => {
                warn!(session = %cmd.name, "Could not remove session, clearing jump list: {}", e);
                SyncOutcome::FailSafeCleared {
                    cause: SyncError::StoreMutationFailure {
                        operation: StoreMutation::Remove,
                        name: cmd.name,
                        source: e,
                    },
                    report: self.synchronizer.clear().await,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        FixedExecutableLocator, InMemoryJumpListSink, InMemorySessionCatalog,
        InMemorySessionListStore,
    };

    fn name(s: &str) -> SessionName {
        SessionName::new(s).unwrap()
    }

    fn setup(stored: &[&str]) -> (RemoveSessionHandler, InMemorySessionListStore, InMemoryJumpListSink) {
        let names: Vec<SessionName> = stored.iter().map(|s| name(s)).collect();
        let store = InMemorySessionListStore::with_sessions(names.clone());
        let sink = InMemoryJumpListSink::new();
        let synchronizer = Arc::new(JumpListSynchronizer::new(
            Arc::new(store.clone()),
            Arc::new(InMemorySessionCatalog::with_sessions(names)),
            Arc::new(sink.clone()),
            Arc::new(FixedExecutableLocator::new("/opt/term/term")),
        ));
        let handler = RemoveSessionHandler::new(Arc::new(store.clone()), synchronizer);
        (handler, store, sink)
    }

    #[tokio::test]
    async fn remove_persists_then_rebuilds() {
        let (handler, store, sink) = setup(&["a", "b", "c"]);

        let outcome = handler.handle(RemoveSessionCommand { name: name("b") }).await;

        assert!(outcome.report().is_committed());
        assert_eq!(store.list().await.unwrap(), vec![name("a"), name("c")]);
        assert_eq!(sink.visible_titles(), vec!["a".to_string(), "c".to_string()]);
    }

    #[tokio::test]
    async fn remove_of_unknown_name_still_rebuilds() {
        let (handler, _store, sink) = setup(&["a"]);

        let outcome = handler.handle(RemoveSessionCommand { name: name("zzz") }).await;

        assert!(matches!(outcome, SyncOutcome::Rebuilt(_)));
        assert_eq!(sink.visible_titles(), vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn remove_failure_clears_list() {
        let (handler, store, sink) = setup(&["a", "b"]);
        handler.handle(RemoveSessionCommand { name: name("zzz") }).await;
        assert_eq!(sink.visible_titles().len(), 2);

        store.reject_changes(true);
        let outcome = handler.handle(RemoveSessionCommand { name: name("a") }).await;

        assert!(outcome.is_fail_safe());
        assert!(sink.visible().is_empty());
        // The store still has both entries; only the display was wiped.
        assert_eq!(store.list().await.unwrap(), vec![name("a"), name("b")]);
    }
}
