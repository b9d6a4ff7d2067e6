//! Jump list sink configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Jump list mirror settings
#[derive(Debug, Clone, Deserialize)]
pub struct SinkConfig {
    /// File the jump list is mirrored to
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Slots the sink reports to the synchronizer
    #[serde(default = "default_max_slots")]
    pub max_slots: usize,
}

impl SinkConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("SINK__OUTPUT_PATH"));
        }
        if self.max_slots == 0 {
            return Err(ValidationError::InvalidMaxSlots);
        }
        Ok(())
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            max_slots: default_max_slots(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("./data/jumplist.yaml")
}

fn default_max_slots() -> usize {
    10
}
