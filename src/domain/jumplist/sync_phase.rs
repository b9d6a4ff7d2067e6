//! Phases of a single synchronization cycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a rebuild or clear currently stands.
///
/// `Committed` and `Aborted` both lead back to `Idle`. There is no partial
/// commit phase: the sink takes a category and its commit as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncPhase {
    #[default]
    Idle,
    TransactionOpen,
    Populating,
    Committed,
    Aborted,
}

impl StateMachine for SyncPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SyncPhase::*;
        matches!(
            (self, target),
            (Idle, TransactionOpen)
                // begin_replace itself failed
                | (Idle, Aborted)
                | (TransactionOpen, Populating)
                // clear commits without populating
                | (TransactionOpen, Committed)
                | (TransactionOpen, Aborted)
                | (Populating, Committed)
                | (Populating, Aborted)
                | (Committed, Idle)
                | (Aborted, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SyncPhase::*;
        match self {
            Idle => vec![TransactionOpen, Aborted],
            TransactionOpen => vec![Populating, Committed, Aborted],
            Populating => vec![Committed, Aborted],
            Committed => vec![Idle],
            Aborted => vec![Idle],
        }
    }
}
