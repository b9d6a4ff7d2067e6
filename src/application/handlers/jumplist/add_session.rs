//! AddSessionHandler - records a session as recently used and resyncs.

use std::sync::Arc;

use tracing::warn;

use super::sync_error::{StoreMutation, SyncError};
use super::synchronizer::JumpListSynchronizer;
use super::SyncOutcome;
use crate::domain::foundation::SessionName;
use crate::ports::SessionListStore;

/// Command to add a session to the recent list.
#[derive(Debug, Clone)]
pub struct AddSessionCommand {
    pub name: SessionName,
}

/// Handler for adding sessions.
pub struct AddSessionHandler {
    store: Arc<dyn SessionListStore>,
    synchronizer: Arc<JumpListSynchronizer>,
}

impl AddSessionHandler {
    pub fn new(store: Arc<dyn SessionListStore>, synchronizer: Arc<JumpListSynchronizer>) -> Self {
        Self {
            store,
            synchronizer,
        }
    }

    pub async fn handle(&self, cmd: AddSessionCommand) -> SyncOutcome {
        // 1. Persist
        match self.store.add(&cmd.name).await {
            // 2. Replay the store into the jump list
            Ok(()) => SyncOutcome::Rebuilt(self.synchronizer.rebuild().await),
            // 2'. Never leave a list we could not keep in step
            Err(e) => {
                warn!(session = %cmd.name, "Could not record session, clearing jump list: {}", e);
                SyncOutcome::FailSafeCleared {
                    cause: SyncError::StoreMutationFailure {
                        operation: StoreMutation::Add,
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
    use crate::ports::StoreError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn name(s: &str) -> SessionName {
        SessionName::new(s).unwrap()
    }

    /// Store that appends without reordering and records calls.
    struct MockSessionListStore {
        sessions: Mutex<Vec<SessionName>>,
        fail_add: bool,
    }

    impl MockSessionListStore {
        fn new(fail_add: bool) -> Self {
            Self {
                sessions: Mutex::new(Vec::new()),
                fail_add,
            }
        }
    }

    #[async_trait]
    impl SessionListStore for MockSessionListStore {
        async fn add(&self, name: &SessionName) -> Result<(), StoreError> {
            if self.fail_add {
                return Err(StoreError::Rejected("duplicate".to_string()));
            }
            self.sessions.lock().unwrap().push(name.clone());
            Ok(())
        }

        async fn remove(&self, name: &SessionName) -> Result<(), StoreError> {
            self.sessions.lock().unwrap().retain(|n| n != name);
            Ok(())
        }

        async fn list(&self) -> Result<Vec<SessionName>, StoreError> {
            Ok(self.sessions.lock().unwrap().clone())
        }
    }

    fn handler_with(
        store: Arc<dyn SessionListStore>,
        valid: &[&str],
    ) -> (AddSessionHandler, InMemoryJumpListSink) {
        let sink = InMemoryJumpListSink::new();
        let synchronizer = Arc::new(JumpListSynchronizer::new(
            Arc::clone(&store),
            Arc::new(InMemorySessionCatalog::with_sessions(
                valid.iter().map(|s| name(s)),
            )),
            Arc::new(sink.clone()),
            Arc::new(FixedExecutableLocator::new("/opt/term/term")),
        ));
        (AddSessionHandler::new(store, synchronizer), sink)
    }

    #[tokio::test]
    async fn add_persists_then_rebuilds() {
        let store = Arc::new(InMemorySessionListStore::new());
        let (handler, sink) = handler_with(store.clone(), &["a", "b"]);

        handler.handle(AddSessionCommand { name: name("a") }).await;
        let outcome = handler.handle(AddSessionCommand { name: name("b") }).await;

        assert!(matches!(outcome, SyncOutcome::Rebuilt(_)));
        assert_eq!(store.list().await.unwrap(), vec![name("b"), name("a")]);
        assert_eq!(sink.visible_titles(), vec!["b".to_string(), "a".to_string()]);
    }

    #[tokio::test]
    async fn add_of_invalid_session_is_stored_but_not_shown() {
        let store = Arc::new(InMemorySessionListStore::new());
        let (handler, sink) = handler_with(store.clone(), &["a"]);

        handler.handle(AddSessionCommand { name: name("a") }).await;
        handler.handle(AddSessionCommand { name: name("ghost") }).await;

        assert_eq!(store.list().await.unwrap(), vec![name("ghost"), name("a")]);
        assert_eq!(sink.visible_titles(), vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn add_failure_clears_list() {
        let store = Arc::new(MockSessionListStore::new(true));
        let (handler, sink) = handler_with(store, &["a"]);
        let mut existing = crate::domain::jumplist::JumpListCommit::recent_sessions();
        existing.push(crate::domain::jumplist::ShortcutDescriptor::for_session(
            std::path::Path::new("/opt/term/term"),
            &name("old"),
        ));
        sink.seed_visible(vec![existing]);

        let outcome = handler.handle(AddSessionCommand { name: name("a") }).await;

        match outcome {
            SyncOutcome::FailSafeCleared { cause, report } => {
                assert!(matches!(
                    cause,
                    SyncError::StoreMutationFailure {
                        operation: StoreMutation::Add,
                        ..
                    }
                ));
                assert!(report.is_committed());
            }
            other => panic!("expected fail-safe clear, got {:?}", other),
        }
        assert!(sink.visible().is_empty());
    }

    #[tokio::test]
    async fn store_without_dedup_is_replayed_as_is() {
        let store = Arc::new(MockSessionListStore::new(false));
        let (handler, sink) = handler_with(store, &["a", "b"]);

        handler.handle(AddSessionCommand { name: name("a") }).await;
        handler.handle(AddSessionCommand { name: name("b") }).await;

        // Append order is kept; ordering policy belongs to the store.
        assert_eq!(sink.visible_titles(), vec!["a".to_string(), "b".to_string()]);
    }
}
