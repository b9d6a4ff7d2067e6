//! Directory-backed Session Catalog Adapter
//!
//! Saved sessions live one file per session inside a directory. A session
//! exists when its file can be opened (and is then closed straight away).

use async_trait::async_trait;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::foundation::SessionName;
use crate::ports::SessionCatalog;

/// Catalog of saved sessions stored as files in `sessions_dir`.
#[derive(Debug, Clone)]
pub struct DirectorySessionCatalog {
    sessions_dir: PathBuf,
}

impl DirectorySessionCatalog {
    pub fn new<P: AsRef<Path>>(sessions_dir: P) -> Self {
        Self {
            sessions_dir: sessions_dir.as_ref().to_path_buf(),
        }
    }

    /// File holding the configuration for `name`.
    pub fn session_path(&self, name: &SessionName) -> PathBuf {
        self.sessions_dir.join(escape_file_name(name.as_str()))
    }
}

#[async_trait]
impl SessionCatalog for DirectorySessionCatalog {
    async fn exists(&self, name: &SessionName) -> bool {
        let path = self.session_path(name);
        match fs::File::open(&path).await {
            Ok(file) => file
                .metadata()
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false),
            Err(e) => {
                debug!("Session '{}' not loadable from {}: {}", name, path.display(), e);
                false
            }
        }
    }
}

/// Escapes a session name into a single safe path component.
///
/// ASCII letters, digits, `-`, `_` and `.` pass through, except a leading
/// `.`; every other byte becomes `%XX` with uppercase hex.
pub fn escape_file_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for (i, byte) in name.bytes().enumerate() {
        let plain = byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_')
            || (byte == b'.' && i > 0);
        if plain {
            escaped.push(byte as char);
        } else {
            let _ = write!(escaped, "%{:02X}", byte);
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn name(s: &str) -> SessionName {
        SessionName::new(s).unwrap()
    }

    #[test]
    fn escape_keeps_safe_characters() {
        assert_eq!(escape_file_name("core-router_01.v2"), "core-router_01.v2");
    }

    #[test]
    fn escape_encodes_separators_and_spaces() {
        assert_eq!(escape_file_name("lab switch/2"), "lab%20switch%2F2");
        assert_eq!(escape_file_name(r"a\b"), "a%5Cb");
    }

    #[test]
    fn escape_encodes_leading_dot() {
        assert_eq!(escape_file_name(".."), "%2E.");
        assert_eq!(escape_file_name(".hidden"), "%2Ehidden");
    }

    #[test]
    fn escape_encodes_utf8_bytes() {
        assert_eq!(escape_file_name("é"), "%C3%A9");
    }

    #[test]
    fn escape_is_case_preserving() {
        assert_ne!(escape_file_name("Router"), escape_file_name("router"));
    }

    #[tokio::test]
    async fn exists_when_session_file_present() {
        let dir = TempDir::new().unwrap();
        let catalog = DirectorySessionCatalog::new(dir.path());
        fs::write(catalog.session_path(&name("lab switch")), "host=10.0.0.1\n")
            .await
            .unwrap();

        assert!(catalog.exists(&name("lab switch")).await);
        assert!(!catalog.exists(&name("lab")).await);
    }

    #[tokio::test]
    async fn directories_do_not_count_as_sessions() {
        let dir = TempDir::new().unwrap();
        let catalog = DirectorySessionCatalog::new(dir.path());
        fs::create_dir(catalog.session_path(&name("folder"))).await.unwrap();

        assert!(!catalog.exists(&name("folder")).await);
    }

    #[tokio::test]
    async fn missing_directory_means_nothing_exists() {
        let dir = TempDir::new().unwrap();
        let catalog = DirectorySessionCatalog::new(dir.path().join("absent"));

        assert!(!catalog.exists(&name("any")).await);
    }
}
