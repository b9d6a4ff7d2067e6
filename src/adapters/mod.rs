//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the synchronizer to external systems:
//! - `store` - Recent session list persistence (file, in-memory)
//! - `catalog` - Saved session lookup (directory, in-memory)
//! - `sink` - Jump list targets (file mirror, in-memory)
//! - `executable` - Host executable resolution

mod atomic_write;
pub mod catalog;
pub mod executable;
pub mod sink;
pub mod store;

pub use catalog::{DirectorySessionCatalog, InMemorySessionCatalog};
pub use executable::{CurrentExeLocator, FixedExecutableLocator};
pub use sink::{FileJumpListSink, InMemoryJumpListSink, JumpListSnapshot, SinkFaults};
pub use store::{FileSessionListStore, InMemorySessionListStore};
