//! Executable Locator Adapters
//!
//! - **CurrentExeLocator** - The running binary, optionally overridden or
//!   redirected to a sibling launcher
//! - **FixedExecutableLocator** - A configured path

use std::path::PathBuf;

use crate::ports::{ExecutableLocator, LocatorError};

/// Locates the running executable via `std::env::current_exe`.
#[derive(Debug, Clone, Default)]
pub struct CurrentExeLocator {
    override_path: Option<PathBuf>,
    file_name: Option<String>,
}

impl CurrentExeLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `path` instead of asking the OS
    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        self.override_path = path;
        self
    }

    /// Point at `file_name` in the same directory as the running binary,
    /// e.g. the GUI launcher when a helper process does the sync.
    pub fn with_file_name(mut self, file_name: Option<String>) -> Self {
        self.file_name = file_name;
        self
    }
}

impl ExecutableLocator for CurrentExeLocator {
    fn resolve(&self) -> Result<PathBuf, LocatorError> {
        if let Some(path) = &self.override_path {
            return Ok(path.clone());
        }

        let exe = std::env::current_exe().map_err(|e| LocatorError::Unresolved(e.to_string()))?;

        Ok(match &self.file_name {
            Some(file_name) => exe.with_file_name(file_name),
            None => exe,
        })
    }
}

/// Always resolves to the same path.
#[derive(Debug, Clone)]
pub struct FixedExecutableLocator {
    path: PathBuf,
}

impl FixedExecutableLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExecutableLocator for FixedExecutableLocator {
    fn resolve(&self) -> Result<PathBuf, LocatorError> {
        Ok(self.path.clone())
    }
}
