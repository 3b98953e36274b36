//! Client configuration file storage.
//!
//! Loads `ClientConfig` from ~/.config/staffdesk/config.toml. A missing file
//! is not an error; the defaults are used instead.

use crate::paths::StaffdeskPaths;
use staffdesk_core::Result;
use staffdesk_core::config::ClientConfig;
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides `api_base_url`.
pub const API_URL_ENV: &str = "STAFFDESK_API_URL";

pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a new ConfigStorage with the default path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: StaffdeskPaths::config_file()?,
        })
    }

    /// Creates a new ConfigStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the configuration and applies environment overrides.
    ///
    /// # Returns
    ///
    /// - `Ok(ClientConfig)`: file parsed (or defaults when absent) and valid
    /// - `Err(_)`: unreadable file, invalid TOML, or invalid values
    pub fn load(&self) -> Result<ClientConfig> {
        let mut config = self.load_file()?;

        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            tracing::debug!("[ConfigStorage] {} overrides api_base_url", API_URL_ENV);
            config.api_base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigStorage] No config at {}, using defaults",
                self.path.display()
            );
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdesk_core::StaffdeskError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::with_path(temp_dir.path().join("config.toml"));

        let config = storage.load_file().unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_load_valid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            api_base_url = "https://hr.example.com/api"
            search_debounce_ms = 250
            "#,
        )
        .unwrap();

        let config = ConfigStorage::with_path(path).load_file().unwrap();
        assert_eq!(config.api_base_url, "https://hr.example.com/api");
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.page_size, 9);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "request_timeout_secs = 0\n").unwrap();

        let result = ConfigStorage::with_path(path).load();
        assert!(matches!(result, Err(StaffdeskError::Config(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "page_size = [").unwrap();

        let result = ConfigStorage::with_path(path).load_file();
        assert!(matches!(result, Err(StaffdeskError::Serialization { .. })));
    }
}
