//! Shortcut handle shared by the reference sinks: records what was set.

use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::jumplist::{IconLocation, ShortcutDescriptor};
use crate::ports::{ShortcutHandle, SinkError};

/// Counts handles that have been created but not yet dropped.
#[derive(Debug, Clone, Default)]
pub(crate) struct LiveCounter(Arc<AtomicUsize>);

impl LiveCounter {
    pub(crate) fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct LiveToken(Arc<AtomicUsize>);

impl LiveToken {
    fn acquire(counter: &LiveCounter) -> Self {
        counter.0.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(&counter.0))
    }
}

impl Drop for LiveToken {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug)]
pub(crate) struct RecordedShortcut {
    target: PathBuf,
    arguments: String,
    description: String,
    icon: Option<IconLocation>,
    title: String,
    rejected_titles: Arc<Vec<String>>,
    _live: LiveToken,
}

impl RecordedShortcut {
    pub(crate) fn new(live: &LiveCounter, rejected_titles: Arc<Vec<String>>) -> Self {
        Self {
            target: PathBuf::new(),
            arguments: String::new(),
            description: String::new(),
            icon: None,
            title: String::new(),
            rejected_titles,
            _live: LiveToken::acquire(live),
        }
    }

    pub(crate) fn to_descriptor(&self) -> ShortcutDescriptor {
        ShortcutDescriptor {
            target: self.target.clone(),
            arguments: self.arguments.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self
                .icon
                .clone()
                .unwrap_or_else(|| IconLocation::default_of(PathBuf::new())),
        }
    }

    /// Recovers the descriptor from a handle created by a reference sink.
    pub(crate) fn descriptor_of(
        handle: &dyn ShortcutHandle,
    ) -> Result<ShortcutDescriptor, SinkError> {
        handle
            .as_any()
            .downcast_ref::<RecordedShortcut>()
            .map(RecordedShortcut::to_descriptor)
            .ok_or(SinkError::ForeignShortcut)
    }
}

impl ShortcutHandle for RecordedShortcut {
    fn set_target(&mut self, path: &Path) -> Result<(), SinkError> {
        self.target = path.to_path_buf();
        Ok(())
    }

    fn set_arguments(&mut self, arguments: &str) -> Result<(), SinkError> {
        self.arguments = arguments.to_string();
        Ok(())
    }

    fn set_description(&mut self, description: &str) -> Result<(), SinkError> {
        self.description = description.to_string();
        Ok(())
    }

    fn set_icon(&mut self, path: &Path, index: i32) -> Result<(), SinkError> {
        self.icon = Some(IconLocation {
            path: path.to_path_buf(),
            index,
        });
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), SinkError> {
        if self.rejected_titles.iter().any(|t| t == title) {
            return Err(SinkError::PropertyRejected {
                property: "title",
                reason: format!("property store refused '{}'", title),
            });
        }
        self.title = title.to_string();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct OtherShortcut;

    impl ShortcutHandle for OtherShortcut {
        fn set_target(&mut self, _: &Path) -> Result<(), SinkError> {
            Ok(())
        }
        fn set_arguments(&mut self, _: &str) -> Result<(), SinkError> {
            Ok(())
        }
        fn set_description(&mut self, _: &str) -> Result<(), SinkError> {
            Ok(())
        }
        fn set_icon(&mut self, _: &Path, _: i32) -> Result<(), SinkError> {
            Ok(())
        }
        fn set_title(&mut self, _: &str) -> Result<(), SinkError> {
            Ok(())
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn live_counter_tracks_drops() {
        let live = LiveCounter::default();
        let first = RecordedShortcut::new(&live, Arc::default());
        let second = RecordedShortcut::new(&live, Arc::default());
        assert_eq!(live.get(), 2);

        drop(first);
        assert_eq!(live.get(), 1);
        drop(second);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn setters_are_recorded() {
        let live = LiveCounter::default();
        let mut shortcut = RecordedShortcut::new(&live, Arc::default());
        shortcut.set_target(Path::new("/bin/term")).unwrap();
        shortcut.set_arguments("-load \"x\"").unwrap();
        shortcut.set_description("Connect to session 'x'").unwrap();
        shortcut.set_icon(Path::new("/bin/term"), 0).unwrap();
        shortcut.set_title("x").unwrap();

        let descriptor = RecordedShortcut::descriptor_of(&shortcut).unwrap();
        assert_eq!(descriptor.title, "x");
        assert_eq!(descriptor.arguments, "-load \"x\"");
        assert_eq!(descriptor.icon, IconLocation::default_of("/bin/term"));
    }

    #[test]
    fn rejected_title_fails_setter() {
        let live = LiveCounter::default();
        let mut shortcut = RecordedShortcut::new(&live, Arc::new(vec!["bad".to_string()]));
        assert!(matches!(
            shortcut.set_title("bad"),
            Err(SinkError::PropertyRejected { property: "title", .. })
        ));
        assert!(shortcut.set_title("good").is_ok());
    }

    #[test]
    fn foreign_handles_are_refused() {
        assert_eq!(
            RecordedShortcut::descriptor_of(&OtherShortcut),
            Err(SinkError::ForeignShortcut)
        );
    }
}
