//! Session List Store Adapters
//!
//! Implementations of the SessionListStore port. Both keep the list newest
//! first: `add` moves a name to the front (no duplicates) and `remove` drops
//! every exact match.
//!
//! - **FileSessionListStore** - YAML document on disk
//! - **InMemorySessionListStore** - In memory (testing/development)

mod file_session_list_store;
mod in_memory_session_list_store;
mod recent_list;

pub use file_session_list_store::FileSessionListStore;
pub use in_memory_session_list_store::InMemorySessionListStore;
