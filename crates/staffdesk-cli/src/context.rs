//! Wiring of config, logging, storage and API clients for one invocation.

use anyhow::{Context, Result, bail};
use staffdesk_core::access::{AccessDecision, AccessGate};
use staffdesk_core::config::ClientConfig;
use staffdesk_core::employee::EmployeeApi;
use staffdesk_core::session::{Session, SessionManager};
use staffdesk_infrastructure::logging::init_tracing;
use staffdesk_infrastructure::{
    ApiClient, ConfigStorage, FileSessionStorage, HttpAuthApi, HttpEmployeeApi,
};
use std::path::PathBuf;
use std::sync::Arc;

pub struct AppContext {
    pub config: ClientConfig,
    pub session: SessionManager,
    pub auth: Arc<HttpAuthApi>,
    pub employees: Arc<dyn EmployeeApi>,
}

impl AppContext {
    /// Loads the config, installs logging and restores the stored session.
    pub fn build(config_path: Option<PathBuf>) -> Result<Self> {
        let config_storage = match config_path {
            Some(path) => ConfigStorage::with_path(path),
            None => ConfigStorage::new()?,
        };
        let config = config_storage
            .load()
            .with_context(|| format!("Failed to load {}", config_storage.path().display()))?;

        init_tracing(&config.log_level);
        tracing::debug!("[Cli] Using API at {}", config.api_base_url);

        let client = ApiClient::from_config(&config)?;
        let auth = Arc::new(HttpAuthApi::new(client.clone()));
        let storage = Arc::new(FileSessionStorage::new()?);

        let session = SessionManager::new(storage, auth.clone());
        session.restore();

        let employees: Arc<dyn EmployeeApi> =
            Arc::new(HttpEmployeeApi::new(client, Arc::new(session.subscribe())));

        Ok(Self {
            config,
            session,
            auth,
            employees,
        })
    }

    /// Runs the access gate for a protected command.
    ///
    /// # Errors
    ///
    /// When there is no signed-in user; the message points at `login`.
    pub fn require_session(&self) -> Result<Session> {
        let mut gate = AccessGate::new(self.session.subscribe(), self.config.login_path.clone());
        match gate.decision() {
            AccessDecision::Render => Ok(self.session.snapshot()),
            AccessDecision::RedirectToLogin { login_path } => bail!(
                "Not signed in (redirect to {login_path}). Run `staffdesk login --username <name>` first."
            ),
            AccessDecision::Loading => bail!("Session is still being restored"),
        }
    }
}
