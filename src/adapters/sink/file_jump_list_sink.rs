//! File-based Jump List Sink Adapter
//!
//! Mirrors the jump list into a YAML snapshot. Like the platform list it is
//! replace-only: a commit rewrites the whole file atomically and an
//! uncommitted transaction leaves the file untouched.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

use super::recorded_shortcut::{LiveCounter, RecordedShortcut};
use crate::adapters::atomic_write::write_atomically;
use crate::domain::jumplist::JumpListCommit;
use crate::ports::{JumpListSink, ReplaceTransaction, ShortcutHandle, SinkError};

/// Contents of the mirror file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpListSnapshot {
    pub committed_at: DateTime<Utc>,
    #[serde(default)]
    pub categories: Vec<JumpListCommit>,
}

impl JumpListSnapshot {
    /// Titles in display order, across all categories.
    pub fn titles(&self) -> Vec<&str> {
        self.categories.iter().flat_map(|c| c.titles()).collect()
    }
}

/// Jump list mirrored to a file.
#[derive(Debug, Clone)]
pub struct FileJumpListSink {
    path: PathBuf,
    max_slots: usize,
    live_shortcuts: LiveCounter,
}

impl FileJumpListSink {
    pub fn new<P: AsRef<Path>>(path: P, max_slots: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_slots,
            live_shortcuts: LiveCounter::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the last committed snapshot; `None` if nothing was committed yet.
    pub async fn read_snapshot(&self) -> Result<Option<JumpListSnapshot>, SinkError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SinkError::Unavailable(format!("{}: {}", self.path.display(), e)))?;

        serde_yaml::from_str(&yaml)
            .map(Some)
            .map_err(|e| SinkError::Unavailable(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl JumpListSink for FileJumpListSink {
    async fn begin_replace(&self) -> Result<Box<dyn ReplaceTransaction>, SinkError> {
        if self.path.is_dir() {
            return Err(SinkError::Unavailable(format!(
                "{} is a directory",
                self.path.display()
            )));
        }

        Ok(Box::new(FileTransaction {
            path: self.path.clone(),
            max_slots: self.max_slots,
            live_shortcuts: self.live_shortcuts.clone(),
            categories: Vec::new(),
        }))
    }
}

struct FileTransaction {
    path: PathBuf,
    max_slots: usize,
    live_shortcuts: LiveCounter,
    categories: Vec<JumpListCommit>,
}

#[async_trait]
impl ReplaceTransaction for FileTransaction {
    fn max_slots(&self) -> usize {
        self.max_slots
    }

    fn new_shortcut(&mut self) -> Result<Box<dyn ShortcutHandle>, SinkError> {
        Ok(Box::new(RecordedShortcut::new(
            &self.live_shortcuts,
            Arc::default(),
        )))
    }

    async fn append_category(
        &mut self,
        label: &str,
        shortcuts: Vec<Box<dyn ShortcutHandle>>,
    ) -> Result<(), SinkError> {
        let entries = shortcuts
            .iter()
            .map(|s| RecordedShortcut::descriptor_of(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        self.categories.push(JumpListCommit {
            category: label.to_string(),
            entries,
        });
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), SinkError> {
        let snapshot = JumpListSnapshot {
            committed_at: Utc::now(),
            categories: self.categories,
        };

        let yaml = serde_yaml::to_string(&snapshot)
            .map_err(|e| SinkError::CommitFailed(e.to_string()))?;

        write_atomically(&self.path, yaml.as_bytes())
            .await
            .map_err(|e| SinkError::CommitFailed(format!("{}: {}", self.path.display(), e)))?;

        debug!("Jump list mirror written to {}", self.path.display());
        Ok(())
    }
}
