use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, StaffdeskError};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Client configuration, stored as `config.toml`.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the record/auth service, e.g. `http://localhost:8080/api`
    pub api_base_url: String,
    /// Records per list page
    pub page_size: usize,
    /// Quiet window before a search fetch is issued
    pub search_debounce_ms: u64,
    pub request_timeout_secs: u64,
    /// Where the access gate sends unauthenticated users
    pub login_path: String,
    pub log_level: String,
    /// How many records the dashboard samples for its counters
    pub dashboard_sample_size: usize,
    pub recent_hire_days: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            log_level: "info".to_string(),
            dashboard_sample_size: 1000,
            recent_hire_days: 30,
        }
    }
}

impl ClientConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Rejects values the client cannot operate with.
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(StaffdeskError::config("api_base_url must not be empty"));
        }
        if self.page_size == 0 {
            return Err(StaffdeskError::config("page_size must be positive"));
        }
        if self.request_timeout_secs == 0 {
            return Err(StaffdeskError::config("request_timeout_secs must be positive"));
        }
        Ok(())
    }
}
