//! Jump List Sink Port - the platform's write-only, replace-only list.
//!
//! A replace runs inside a transaction: `begin_replace` opens it and reports
//! how many slots the platform allows, shortcuts are created and filled
//! through their setters, categories are appended, and `commit` swaps the
//! visible list in one step. Dropping a transaction without committing
//! leaves whatever the platform already shows. Dropping a shortcut releases
//! its platform object.

use async_trait::async_trait;
use std::any::Any;
use std::path::Path;

/// Errors that can occur while talking to the platform sink
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("Jump list is unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to create shortcut: {0}")]
    ShortcutCreation(String),

    #[error("Failed to set shortcut {property}: {reason}")]
    PropertyRejected {
        property: &'static str,
        reason: String,
    },

    #[error("Failed to append category '{label}': {reason}")]
    AppendFailed { label: String, reason: String },

    #[error("Failed to commit jump list: {0}")]
    CommitFailed(String),

    #[error("Shortcut was not created by this sink")]
    ForeignShortcut,
}

/// Platform object backing one shortcut.
pub trait ShortcutHandle: Send + std::fmt::Debug {
    fn set_target(&mut self, path: &Path) -> Result<(), SinkError>;

    fn set_arguments(&mut self, arguments: &str) -> Result<(), SinkError>;

    fn set_description(&mut self, description: &str) -> Result<(), SinkError>;

    fn set_icon(&mut self, path: &Path, index: i32) -> Result<(), SinkError>;

    /// The title lives in the shortcut's property store on some platforms,
    /// so it can fail independently of the other setters.
    fn set_title(&mut self, title: &str) -> Result<(), SinkError>;

    /// Lets the owning sink recover its concrete shortcut type.
    fn as_any(&self) -> &dyn Any;
}

/// An open replace of the whole jump list.
#[async_trait]
pub trait ReplaceTransaction: Send {
    /// Slots the platform currently allows, as reported when the
    /// transaction was opened.
    fn max_slots(&self) -> usize;

    /// Allocate an empty shortcut object.
    ///
    /// # Errors
    /// Returns `SinkError::ShortcutCreation` if the platform could not
    /// allocate one
    fn new_shortcut(&mut self) -> Result<Box<dyn ShortcutHandle>, SinkError>;

    /// Append a labelled category holding `shortcuts` in order.
    async fn append_category(
        &mut self,
        label: &str,
        shortcuts: Vec<Box<dyn ShortcutHandle>>,
    ) -> Result<(), SinkError>;

    /// Replace the visible list with everything appended so far.
    async fn commit(self: Box<Self>) -> Result<(), SinkError>;
}

/// Port for the platform jump list.
#[async_trait]
pub trait JumpListSink: Send + Sync {
    /// Open a replace transaction.
    ///
    /// # Errors
    /// Returns `SinkError::Unavailable` if the platform list cannot be opened
    async fn begin_replace(&self) -> Result<Box<dyn ReplaceTransaction>, SinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_rejected_names_the_property() {
        let err = SinkError::PropertyRejected {
            property: "title",
            reason: "no property store".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to set shortcut title: no property store"
        );
    }

    #[test]
    fn append_failed_names_the_label() {
        let err = SinkError::AppendFailed {
            label: "Recent Sessions".to_string(),
            reason: "denied".to_string(),
        };
        assert!(err.to_string().contains("'Recent Sessions'"));
    }

    #[test]
    fn jump_list_sink_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn JumpListSink>();
    }

    #[test]
    fn transactions_and_shortcuts_are_send() {
        fn assert_send<T: Send + ?Sized>() {}
        assert_send::<dyn ReplaceTransaction>();
        assert_send::<dyn ShortcutHandle>();
    }
}
