//! Session Catalog Adapters
//!
//! - **DirectorySessionCatalog** - One file per saved session in a directory
//! - **InMemorySessionCatalog** - Set of names (testing/development)

mod directory_session_catalog;
mod in_memory_session_catalog;

pub use directory_session_catalog::{escape_file_name, DirectorySessionCatalog};
pub use in_memory_session_catalog::InMemorySessionCatalog;
