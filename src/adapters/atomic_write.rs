//! Write-to-temp-then-rename for the file-backed adapters.

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Temp file used while replacing `path`.
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replaces the contents of `path` so readers never observe a partial file.
///
/// 1. Write content to `<path>.tmp`
/// 2. Sync to disk
/// 3. Rename over `path`
pub(crate) async fn write_atomically(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let temp = temp_path(path);
    let mut file = fs::File::create(&temp).await?;
    file.write_all(content).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(&temp, path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn temp_path_appends_suffix() {
        assert_eq!(
            temp_path(Path::new("/data/recent.yaml")),
            PathBuf::from("/data/recent.yaml.tmp")
        );
    }

    #[tokio::test]
    async fn write_atomically_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("list.yaml");

        write_atomically(&path, b"sessions: []\n").await.unwrap();

        assert_eq!(fs::read_to_string(&path).await.unwrap(), "sessions: []\n");
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn write_atomically_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.yaml");

        write_atomically(&path, b"first").await.unwrap();
        write_atomically(&path, b"second").await.unwrap();

        assert_eq!(fs::read_to_string(&path).await.unwrap(), "second");
    }
}
