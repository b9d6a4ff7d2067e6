//! Shortcut target configuration

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

use super::error::ValidationError;

/// How the shortcut target is resolved
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExecutableConfig {
    /// Use this path instead of the running executable
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Launcher file name next to the running executable
    #[serde(default)]
    pub file_name: Option<String>,
}

impl ExecutableConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(file_name) = &self.file_name {
            let mut components = Path::new(file_name).components();
            let bare = matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            );
            if !bare {
                return Err(ValidationError::InvalidExecutableFileName);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_file_name(name: &str) -> ExecutableConfig {
        ExecutableConfig {
            path: None,
            file_name: Some(name.to_string()),
        }
    }

    #[test]
    fn test_bare_file_name_accepted() {
        assert!(with_file_name("term.exe").validate().is_ok());
    }

    #[test]
    fn test_file_name_with_directory_rejected() {
        assert_eq!(
            with_file_name("bin/term").validate(),
            Err(ValidationError::InvalidExecutableFileName)
        );
        assert!(with_file_name("..").validate().is_err());
        assert!(with_file_name("").validate().is_err());
    }
}
