//! JumpListSynchronizer - rebuilds the platform jump list from the store.
//!
//! The platform list cannot be read back or patched, only replaced, so every
//! change is a full replay: open a replace transaction, walk the persisted
//! list in order, keep the entries that still have a saved configuration up
//! to the slot budget, and commit them as one "Recent Sessions" category.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::sync_error::SyncError;
use crate::domain::foundation::StateMachine;
use crate::domain::jumplist::{entry_budget, JumpListCommit, ShortcutDescriptor, SyncPhase};
use crate::ports::{
    ExecutableLocator, JumpListSink, ReplaceTransaction, SessionCatalog, SessionListStore,
    ShortcutHandle, SinkError,
};

/// Which operation a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOperation {
    Rebuild,
    Clear,
}

/// What one rebuild or clear did.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub operation: SyncOperation,
    /// `Committed` or `Aborted`.
    pub phase: SyncPhase,
    /// Entries handed to the sink, in display order. Empty for a clear.
    pub commit: JumpListCommit,
    /// Entries dropped along the way.
    pub skipped: Vec<SyncError>,
    /// Why the cycle aborted, or why a committed rebuild came out empty.
    pub failure: Option<SyncError>,
}

impl SyncReport {
    pub fn is_committed(&self) -> bool {
        self.phase == SyncPhase::Committed
    }

    pub fn entry_count(&self) -> usize {
        self.commit.len()
    }
}

/// Tracks the phase of one cycle and builds its report.
struct SyncCycle {
    operation: SyncOperation,
    phase: SyncPhase,
}

impl SyncCycle {
    fn start(operation: SyncOperation) -> Self {
        Self {
            operation,
            phase: SyncPhase::Idle,
        }
    }

    fn advance(&mut self, target: SyncPhase) {
        match self.phase.transition_to(target) {
            Ok(phase) => self.phase = phase,
            Err(e) => error!("{:?} cycle: {}", self.operation, e),
        }
    }

    fn finish(
        mut self,
        target: SyncPhase,
        commit: JumpListCommit,
        skipped: Vec<SyncError>,
        failure: Option<SyncError>,
    ) -> SyncReport {
        self.advance(target);
        let report = SyncReport {
            operation: self.operation,
            phase: self.phase,
            commit,
            skipped,
            failure,
        };
        self.advance(SyncPhase::Idle);
        report
    }

    fn abort(self, reason: SyncError, skipped: Vec<SyncError>) -> SyncReport {
        self.finish(
            SyncPhase::Aborted,
            JumpListCommit::recent_sessions(),
            skipped,
            Some(reason),
        )
    }
}

/// Rebuilds or clears the jump list. Holds no state between calls.
pub struct JumpListSynchronizer {
    store: Arc<dyn SessionListStore>,
    catalog: Arc<dyn SessionCatalog>,
    sink: Arc<dyn JumpListSink>,
    locator: Arc<dyn ExecutableLocator>,
}

impl JumpListSynchronizer {
    pub fn new(
        store: Arc<dyn SessionListStore>,
        catalog: Arc<dyn SessionCatalog>,
        sink: Arc<dyn JumpListSink>,
        locator: Arc<dyn ExecutableLocator>,
    ) -> Self {
        Self {
            store,
            catalog,
            sink,
            locator,
        }
    }

    /// Replace the jump list with the valid prefix of the persisted list.
    ///
    /// If the sink cannot be opened or refuses the commit, nothing is retried
    /// and the platform keeps whatever it showed before. A refused category
    /// still commits, leaving the list empty.
    pub async fn rebuild(&self) -> SyncReport {
        let mut cycle = SyncCycle::start(SyncOperation::Rebuild);

        // Resolution failure is not fatal: shortcuts get an empty target.
        let executable = self.locator.resolve().unwrap_or_else(|e| {
            warn!("Rebuilding jump list without an executable path: {}", e);
            PathBuf::new()
        });

        let mut transaction = match self.sink.begin_replace().await {
            Ok(transaction) => transaction,
            Err(e) => {
                warn!("Jump list rebuild abandoned: {}", e);
                return cycle.abort(SyncError::SinkUnavailable(e), Vec::new());
            }
        };
        cycle.advance(SyncPhase::TransactionOpen);

        let budget = entry_budget(transaction.max_slots());
        debug!(
            "Jump list transaction open: {} platform slots, budget {}",
            transaction.max_slots(),
            budget
        );

        // An unreadable store is shown as an empty list rather than a stale one.
        let (sessions, read_failure) = match self.store.list().await {
            Ok(sessions) => (sessions, None),
            Err(e) => {
                error!("Could not read recent sessions, committing an empty jump list: {}", e);
                (Vec::new(), Some(SyncError::StoreReadFailure(e)))
            }
        };

        cycle.advance(SyncPhase::Populating);
        let mut commit = JumpListCommit::recent_sessions();
        let mut shortcuts: Vec<Box<dyn ShortcutHandle>> = Vec::with_capacity(budget);
        let mut skipped = Vec::new();

        for name in sessions {
            if shortcuts.len() >= budget {
                debug!("Jump list budget of {} reached, dropping the rest", budget);
                break;
            }

            if !self.catalog.exists(&name).await {
                debug!(session = %name, "Skipping session with no saved configuration");
                skipped.push(SyncError::EntryInvalid(name));
                continue;
            }

            let descriptor = ShortcutDescriptor::for_session(&executable, &name);
            match materialize(transaction.as_mut(), &descriptor) {
                Ok(shortcut) => {
                    shortcuts.push(shortcut);
                    commit.push(descriptor);
                }
                Err(e) => {
                    warn!(session = %name, "Skipping jump list entry: {}", e);
                    skipped.push(SyncError::DescriptorConstructionFailure { name, source: e });
                }
            }
        }

        let mut failure = read_failure;
        if !shortcuts.is_empty() {
            // The transaction is still committed, empty, so a rejected
            // category never leaves stale entries on display.
            let appended = transaction
                .append_category(&commit.category, shortcuts)
                .await;
            if let Err(e) = appended {
                warn!("Jump list category rejected, committing an empty list: {}", e);
                commit = JumpListCommit::recent_sessions();
                failure = Some(SyncError::SinkUnavailable(e));
            }
        }

        if let Err(e) = transaction.commit().await {
            warn!("Jump list commit failed, keeping previous list: {}", e);
            return cycle.abort(SyncError::SinkUnavailable(e), skipped);
        }

        info!(
            "Jump list rebuilt with {} entries ({} skipped)",
            commit.len(),
            skipped.len()
        );
        cycle.finish(SyncPhase::Committed, commit, skipped, failure)
    }

    /// Commit an empty replacement, leaving no recent sessions visible.
    ///
    /// Safe to call when the list is already empty. Never uses a platform
    /// "delete list" call, which needs an explicitly configured app identity.
    pub async fn clear(&self) -> SyncReport {
        let mut cycle = SyncCycle::start(SyncOperation::Clear);

        let transaction = match self.sink.begin_replace().await {
            Ok(transaction) => transaction,
            Err(e) => {
                warn!("Jump list clear abandoned: {}", e);
                return cycle.abort(SyncError::SinkUnavailable(e), Vec::new());
            }
        };
        cycle.advance(SyncPhase::TransactionOpen);

        if let Err(e) = transaction.commit().await {
            warn!("Jump list clear failed to commit: {}", e);
            return cycle.abort(SyncError::SinkUnavailable(e), Vec::new());
        }

        info!("Jump list cleared");
        cycle.finish(
            SyncPhase::Committed,
            JumpListCommit::recent_sessions(),
            Vec::new(),
            None,
        )
    }
}

/// Allocates a platform shortcut and fills it from `descriptor`.
///
/// On any failure the half-built shortcut is dropped, releasing it.
fn materialize(
    transaction: &mut dyn ReplaceTransaction,
    descriptor: &ShortcutDescriptor,
) -> Result<Box<dyn ShortcutHandle>, SinkError> {
    let mut shortcut = transaction.new_shortcut()?;
    shortcut.set_target(&descriptor.target)?;
    shortcut.set_arguments(&descriptor.arguments)?;
    shortcut.set_description(&descriptor.description)?;
    shortcut.set_icon(&descriptor.icon.path, descriptor.icon.index)?;
    shortcut.set_title(&descriptor.title)?;
    Ok(shortcut)
}
