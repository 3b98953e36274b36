//! Unified path management for staffdesk files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/staffdesk/         # Config directory
//! ├── config.toml              # Client configuration
//! └── session.json             # Persisted identity of the CLI session
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "staffdesk";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for staffdesk_core::StaffdeskError {
    fn from(err: PathError) -> Self {
        staffdesk_core::StaffdeskError::config(err.to_string())
    }
}

pub struct StaffdeskPaths;

impl StaffdeskPaths {
    /// Returns the staffdesk configuration directory (e.g. `~/.config/staffdesk/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to config.toml.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted session.
    ///
    /// # Security Note
    ///
    /// The file holds a bearer token in plaintext; it should not be readable
    /// by other users.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_in_config_dir() {
        if let Ok(dir) = StaffdeskPaths::config_dir() {
            assert!(dir.ends_with("staffdesk"));
            assert_eq!(StaffdeskPaths::config_file().unwrap(), dir.join("config.toml"));
            assert_eq!(StaffdeskPaths::session_file().unwrap(), dir.join("session.json"));
        }
    }
}
