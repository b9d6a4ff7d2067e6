//! Executable Locator Port - where the shortcuts should point.

use std::path::PathBuf;

/// Errors that can occur while resolving the host executable
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("Could not determine the running executable: {0}")]
    Unresolved(String),
}

/// Resolves the host executable used as shortcut target and icon source.
pub trait ExecutableLocator: Send + Sync {
    fn resolve(&self) -> Result<PathBuf, LocatorError>;
}
