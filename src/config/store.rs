//! Session list store configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the recent session list is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// YAML file holding the list
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Keep at most this many sessions (unbounded when unset)
    #[serde(default)]
    pub max_entries: Option<usize>,
}

impl StoreConfig {
    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORE__PATH"));
        }
        if self.max_entries == Some(0) {
            return Err(ValidationError::InvalidRetention);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            max_entries: None,
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data/recent-sessions.yaml")
}
