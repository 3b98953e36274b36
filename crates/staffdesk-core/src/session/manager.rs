use super::model::{Identity, Role, Session};
use super::storage::{PersistedIdentity, SessionStorage};
use crate::auth::AuthApi;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::watch;

/// Owns the authenticated-identity state for the lifetime of the client.
///
/// `SessionManager` is responsible for:
/// - Restoring a persisted identity at startup
/// - Establishing a session through the auth service
/// - Clearing the session on logout
/// - Notifying subscribers whenever the session changes
///
/// Construct exactly one per application process and hand out `Arc`s or
/// receivers from [`SessionManager::subscribe`] to consumers.
pub struct SessionManager {
    /// Persisted identity store (tab-scoped)
    storage: Arc<dyn SessionStorage>,
    /// External login service
    auth: Arc<dyn AuthApi>,
    /// Current session, observable by subscribers
    state: watch::Sender<Session>,
}

impl SessionManager {
    /// Creates a new `SessionManager` in the loading phase.
    ///
    /// # Arguments
    ///
    /// * `storage` - Store holding the persisted identity
    /// * `auth` - Client for the external auth service
    pub fn new(storage: Arc<dyn SessionStorage>, auth: Arc<dyn AuthApi>) -> Self {
        let (state, _) = watch::channel(Session::initial());
        Self {
            storage,
            auth,
            state,
        }
    }

    /// Reads the persisted identity, if any, and leaves the loading phase.
    ///
    /// Absence of persisted data is the normal logged-out result. An
    /// unreadable store is logged and treated the same way. Only the first
    /// call on an instance has any effect.
    pub fn restore(&self) {
        if !self.state.borrow().loading_phase {
            tracing::debug!("[SessionManager] restore ignored: already resolved");
            return;
        }

        let identity = match self.storage.load() {
            Ok(persisted) => persisted.and_then(PersistedIdentity::into_identity),
            Err(e) => {
                tracing::warn!("[SessionManager] Failed to read persisted session: {}", e);
                None
            }
        };

        if let Some(identity) = &identity {
            tracing::info!(
                "[SessionManager] Restored session for {} ({})",
                identity.username,
                identity.role
            );
        }

        self.state.send_replace(Session {
            identity,
            loading_phase: false,
        });
    }

    /// Submits credentials and, on success, stores the returned identity.
    ///
    /// # Arguments
    ///
    /// * `username` - Login name; also kept as the display name
    /// * `password` - Password sent to the auth service
    ///
    /// # Errors
    ///
    /// Returns the auth service failure (e.g. `InvalidCredentials`) or a
    /// storage failure. In both cases the current session is left untouched;
    /// the attempt is not retried.
    pub async fn establish(&self, username: &str, password: &str) -> Result<Session> {
        let response = self.auth.login(username, password).await.inspect_err(|e| {
            tracing::warn!("[SessionManager] Login failed for {}: {}", username, e);
        })?;

        let identity = Identity {
            token: response.token,
            role: Role::from_wire(&response.role),
            username: username.to_string(),
        };

        self.storage.save(&PersistedIdentity::from(&identity))?;

        tracing::info!(
            "[SessionManager] Session established for {} ({})",
            identity.username,
            identity.role
        );

        let loading_phase = self.state.borrow().loading_phase;
        let session = Session {
            identity: Some(identity),
            loading_phase,
        };
        self.state.send_replace(session.clone());
        Ok(session)
    }

    /// Erases the persisted identity and resets the session.
    ///
    /// Never fails: a storage error is logged and the in-memory session is
    /// cleared regardless.
    pub fn clear(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!("[SessionManager] Failed to erase persisted session: {}", e);
        }

        let loading_phase = self.state.borrow().loading_phase;
        self.state.send_replace(Session {
            identity: None,
            loading_phase,
        });
        tracing::info!("[SessionManager] Session cleared");
    }

    /// Returns a copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Returns a receiver that observes every session change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }
}
