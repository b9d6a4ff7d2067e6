//! In-Memory Jump List Sink Adapter
//!
//! Behaves like the platform list: replace-only, one transaction at a time,
//! nothing visible changes until commit. Records every commit and supports
//! fault injection so the synchronizer's recovery paths can be exercised.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use super::recorded_shortcut::{LiveCounter, RecordedShortcut};
use crate::domain::jumplist::JumpListCommit;
use crate::ports::{JumpListSink, ReplaceTransaction, ShortcutHandle, SinkError};

/// Slots a fresh in-memory sink reports, matching the usual platform default.
pub const DEFAULT_MAX_SLOTS: usize = 10;

/// Faults to inject into subsequent transactions.
#[derive(Debug, Clone, Default)]
pub struct SinkFaults {
    /// `begin_replace` fails.
    pub fail_begin: bool,
    /// The n-th `new_shortcut` call of a transaction fails (0-based).
    pub fail_shortcut_creation_at: HashSet<usize>,
    /// `set_title` fails for these titles.
    pub reject_titles: Vec<String>,
    /// `append_category` fails.
    pub fail_append: bool,
    /// `commit` fails.
    pub fail_commit: bool,
}

#[derive(Debug, Default)]
struct SinkState {
    max_slots: usize,
    visible: Vec<JumpListCommit>,
    commits: Vec<Vec<JumpListCommit>>,
    begun: usize,
    abandoned: usize,
    faults: SinkFaults,
}

/// In-memory jump list (testing/development).
#[derive(Debug, Clone)]
pub struct InMemoryJumpListSink {
    state: Arc<Mutex<SinkState>>,
    live_shortcuts: LiveCounter,
}

impl Default for InMemoryJumpListSink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryJumpListSink {
    pub fn new() -> Self {
        Self::with_max_slots(DEFAULT_MAX_SLOTS)
    }

    /// Sink whose transactions report `max_slots`
    pub fn with_max_slots(max_slots: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(SinkState {
                max_slots,
                ..SinkState::default()
            })),
            live_shortcuts: LiveCounter::default(),
        }
    }

    fn state(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    pub fn set_faults(&self, faults: SinkFaults) {
        self.state().faults = faults;
    }

    pub fn clear_faults(&self) {
        self.state().faults = SinkFaults::default();
    }

    /// Pretend the platform already shows `categories`
    pub fn seed_visible(&self, categories: Vec<JumpListCommit>) {
        self.state().visible = categories;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Inspection Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Categories currently shown.
    pub fn visible(&self) -> Vec<JumpListCommit> {
        self.state().visible.clone()
    }

    /// Titles currently shown, across all categories.
    pub fn visible_titles(&self) -> Vec<String> {
        self.state()
            .visible
            .iter()
            .flat_map(|c| c.entries.iter().map(|e| e.title.clone()))
            .collect()
    }

    /// Every successful commit, oldest first.
    pub fn commits(&self) -> Vec<Vec<JumpListCommit>> {
        self.state().commits.clone()
    }

    pub fn commit_count(&self) -> usize {
        self.state().commits.len()
    }

    /// Transactions opened so far.
    pub fn transactions_begun(&self) -> usize {
        self.state().begun
    }

    /// Transactions dropped without a successful commit.
    pub fn transactions_abandoned(&self) -> usize {
        self.state().abandoned
    }

    /// Shortcut handles not yet released.
    pub fn live_shortcuts(&self) -> usize {
        self.live_shortcuts.get()
    }
}

#[async_trait]
impl JumpListSink for InMemoryJumpListSink {
    async fn begin_replace(&self) -> Result<Box<dyn ReplaceTransaction>, SinkError> {
        let mut state = self.state();
        if state.faults.fail_begin {
            return Err(SinkError::Unavailable("destination list refused BeginList".to_string()));
        }
        state.begun += 1;

        Ok(Box::new(InMemoryTransaction {
            state: Arc::clone(&self.state),
            live_shortcuts: self.live_shortcuts.clone(),
            max_slots: state.max_slots,
            faults: state.faults.clone(),
            rejected_titles: Arc::new(state.faults.reject_titles.clone()),
            created: 0,
            categories: Vec::new(),
            committed: false,
        }))
    }
}

struct InMemoryTransaction {
    state: Arc<Mutex<SinkState>>,
    live_shortcuts: LiveCounter,
    max_slots: usize,
    faults: SinkFaults,
    rejected_titles: Arc<Vec<String>>,
    created: usize,
    categories: Vec<JumpListCommit>,
    committed: bool,
}

#[async_trait]
impl ReplaceTransaction for InMemoryTransaction {
    fn max_slots(&self) -> usize {
        self.max_slots
    }

    fn new_shortcut(&mut self) -> Result<Box<dyn ShortcutHandle>, SinkError> {
        let index = self.created;
        self.created += 1;
        if self.faults.fail_shortcut_creation_at.contains(&index) {
            return Err(SinkError::ShortcutCreation(format!(
                "allocation {} refused",
                index
            )));
        }
        Ok(Box::new(RecordedShortcut::new(
            &self.live_shortcuts,
            Arc::clone(&self.rejected_titles),
        )))
    }

    async fn append_category(
        &mut self,
        label: &str,
        shortcuts: Vec<Box<dyn ShortcutHandle>>,
    ) -> Result<(), SinkError> {
        if self.faults.fail_append {
            return Err(SinkError::AppendFailed {
                label: label.to_string(),
                reason: "category rejected".to_string(),
            });
        }

        let entries = shortcuts
            .iter()
            .map(|s| RecordedShortcut::descriptor_of(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        self.categories.push(JumpListCommit {
            category: label.to_string(),
            entries,
        });
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), SinkError> {
        let mut this = self;
        if this.faults.fail_commit {
            return Err(SinkError::CommitFailed("CommitList refused".to_string()));
        }

        let categories = std::mem::take(&mut this.categories);
        {
            let mut state = this.state.lock().unwrap_or_else(|e| e.into_inner());
            state.visible = categories.clone();
            state.commits.push(categories);
        }

        this.committed = true;
        Ok(())
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        if !self.committed {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.abandoned += 1;
        }
    }
}
