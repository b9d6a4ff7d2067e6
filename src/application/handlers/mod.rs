//! Application handlers.
//!
//! Command handlers that orchestrate the store, catalog and sink ports.

pub mod jumplist;

pub use jumplist::{
    AddSessionCommand, AddSessionHandler, JumpListSynchronizer, RecentSessionsJumpList,
    RemoveSessionCommand, RemoveSessionHandler, StoreMutation, SyncError, SyncOperation,
    SyncOutcome, SyncReport,
};
