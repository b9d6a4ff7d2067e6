//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the synchronizer and the outside world. Adapters implement these ports.
//!
//! - `SessionListStore` - Persisted, ordered list of recent session names
//! - `SessionCatalog` - Whether a saved session configuration still exists
//! - `JumpListSink` - The platform's write-only, replace-only jump list
//! - `ExecutableLocator` - Path of the host executable shortcuts launch

mod executable_locator;
mod jump_list_sink;
mod session_catalog;
mod session_list_store;

pub use executable_locator::{ExecutableLocator, LocatorError};
pub use jump_list_sink::{JumpListSink, ReplaceTransaction, ShortcutHandle, SinkError};
pub use session_catalog::SessionCatalog;
pub use session_list_store::{SessionListStore, StoreError};
