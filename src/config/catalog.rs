//! Saved session catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where saved session configurations live
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Directory with one file per saved session
    #[serde(default = "default_sessions_dir")]
    pub sessions_dir: PathBuf,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sessions_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("CATALOG__SESSIONS_DIR"));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sessions_dir: default_sessions_dir(),
        }
    }
}

fn default_sessions_dir() -> PathBuf {
    PathBuf::from("./data/sessions")
}
