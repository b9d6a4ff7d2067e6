//! Jump list module - descriptors, commits and the sync cycle phases.

mod commit;
mod shortcut;
mod sync_phase;

pub use commit::{entry_budget, JumpListCommit, MAX_JUMPLIST_ITEMS, RECENT_SESSIONS_CATEGORY};
pub use shortcut::{load_arguments, IconLocation, ShortcutDescriptor, LOAD_SWITCH};
pub use sync_phase::SyncPhase;
