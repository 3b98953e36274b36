//! Persisted identity storage backends.
//!
//! - [`MemorySessionStorage`]: lives as long as the process, the analogue of a
//!   browser tab's session storage.
//! - [`FileSessionStorage`]: JSON file, so consecutive CLI invocations share
//!   one console session until `logout`.

use crate::paths::StaffdeskPaths;
use staffdesk_core::Result;
use staffdesk_core::session::{PersistedIdentity, SessionStorage};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slot: Mutex<Option<PersistedIdentity>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Result<Option<PersistedIdentity>> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| staffdesk_core::StaffdeskError::internal(e.to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, identity: &PersistedIdentity) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| staffdesk_core::StaffdeskError::internal(e.to_string()))?;
        *slot = Some(identity.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| staffdesk_core::StaffdeskError::internal(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Storage for the persisted identity in a JSON file (session.json).
///
/// Responsibilities:
/// - Read/write the three identity fields as a flat JSON object
/// - Treat a missing file as "nothing persisted"
/// - Remove the file on clear
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Creates storage at the default path (~/.config/staffdesk/session.json).
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: StaffdeskPaths::session_file()?,
        })
    }

    /// Creates storage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<PersistedIdentity>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let identity = serde_json::from_str(&content)?;
        Ok(Some(identity))
    }

    fn save(&self, identity: &PersistedIdentity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a sibling temp file first so a crash never leaves half a token.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(identity)?)?;
        restrict_permissions(&tmp)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &std::path::Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &std::path::Path) -> std::io::Result<()> {
    Ok(())
}
