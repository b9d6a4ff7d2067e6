//! Shortcut descriptors - one per visible jump list entry.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::foundation::SessionName;

/// Command line switch that makes the host load a saved session.
pub const LOAD_SWITCH: &str = "-load";

/// Icon reference: a file holding icon resources plus the resource index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLocation {
    pub path: PathBuf,
    pub index: i32,
}

impl IconLocation {
    /// Default icon of the given file.
    pub fn default_of(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            index: 0,
        }
    }
}

/// Everything the platform needs to render and launch one entry.
///
/// Built fresh on every rebuild and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutDescriptor {
    pub target: PathBuf,
    pub arguments: String,
    pub title: String,
    pub description: String,
    pub icon: IconLocation,
}

impl ShortcutDescriptor {
    /// Builds the entry that relaunches `executable` on the named session.
    ///
    /// The name is passed through verbatim: quotes or other special
    /// characters inside it are not escaped.
    pub fn for_session(executable: &Path, name: &SessionName) -> Self {
        Self {
            target: executable.to_path_buf(),
            arguments: load_arguments(name),
            title: name.as_str().to_string(),
            description: format!("Connect to session '{}'", name),
            icon: IconLocation::default_of(executable),
        }
    }
}

/// Arguments that load `name` on launch: `-load "<name>"`.
pub fn load_arguments(name: &SessionName) -> String {
    format!("{} \"{}\"", LOAD_SWITCH, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> SessionName {
        SessionName::new(s).unwrap()
    }

    #[test]
    fn for_session_fills_every_field() {
        let exe = Path::new(r"C:\Program Files\Term\term.exe");
        let descriptor = ShortcutDescriptor::for_session(exe, &name("core-router"));

        assert_eq!(descriptor.target, exe);
        assert_eq!(descriptor.arguments, "-load \"core-router\"");
        assert_eq!(descriptor.title, "core-router");
        assert_eq!(descriptor.description, "Connect to session 'core-router'");
        assert_eq!(descriptor.icon, IconLocation::default_of(exe));
        assert_eq!(descriptor.icon.index, 0);
    }

    #[test]
    fn names_with_spaces_stay_inside_quotes() {
        assert_eq!(load_arguments(&name("lab switch 2")), "-load \"lab switch 2\"");
    }

    #[test]
    fn empty_executable_path_is_carried_through() {
        let descriptor = ShortcutDescriptor::for_session(Path::new(""), &name("db"));
        assert_eq!(descriptor.target, PathBuf::new());
        assert_eq!(descriptor.icon.path, PathBuf::new());
    }
}
