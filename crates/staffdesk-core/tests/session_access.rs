use staffdesk_core::access::{AccessDecision, AccessGate};
use staffdesk_core::auth::{AuthApi, LoginResponse};
use staffdesk_core::session::{PersistedIdentity, Role, SessionManager, SessionStorage};
use staffdesk_core::{Result, StaffdeskError};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MemoryStorage {
    stored: Mutex<Option<PersistedIdentity>>,
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedIdentity>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, identity: &PersistedIdentity) -> Result<()> {
        *self.stored.lock().unwrap() = Some(identity.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

struct FixedAuth;

#[async_trait::async_trait]
impl AuthApi for FixedAuth {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        if username == "admin" && password == "secret" {
            Ok(LoginResponse {
                token: "jwt-1".to_string(),
                role: "ADMIN".to_string(),
            })
        } else {
            Err(StaffdeskError::InvalidCredentials)
        }
    }

    async fn request_password_reset(&self, _email: &str) -> Result<()> {
        Ok(())
    }

    async fn reset_password(&self, _token: &str, _new_password: &str) -> Result<()> {
        Ok(())
    }
}

fn redirect() -> AccessDecision {
    AccessDecision::RedirectToLogin {
        login_path: "/login".to_string(),
    }
}

#[tokio::test]
async fn test_gate_walks_through_the_session_lifecycle() {
    let storage = Arc::new(MemoryStorage::default());
    let manager = SessionManager::new(storage.clone(), Arc::new(FixedAuth));
    let mut gate = AccessGate::new(manager.subscribe(), "/login");

    assert_eq!(gate.decision(), AccessDecision::Loading);

    manager.restore();
    assert_eq!(gate.decision(), redirect());

    manager.establish("admin", "secret").await.unwrap();
    assert_eq!(gate.decision(), AccessDecision::Render);

    manager.clear();
    assert_eq!(gate.decision(), redirect());
    assert!(storage.stored.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_failed_login_keeps_redirecting() {
    let manager = SessionManager::new(Arc::new(MemoryStorage::default()), Arc::new(FixedAuth));
    let mut gate = AccessGate::new(manager.subscribe(), "/login");
    manager.restore();

    let err = manager.establish("admin", "nope").await.unwrap_err();

    assert_eq!(err.user_message(), "Invalid username or password");
    assert_eq!(gate.decision(), redirect());
}

#[tokio::test]
async fn test_new_manager_restores_what_the_previous_one_persisted() {
    let storage = Arc::new(MemoryStorage::default());
    let first = SessionManager::new(storage.clone(), Arc::new(FixedAuth));
    first.restore();
    first.establish("admin", "secret").await.unwrap();

    // Simulates a reload: same storage scope, fresh manager.
    let second = SessionManager::new(storage, Arc::new(FixedAuth));
    assert!(second.snapshot().loading_phase);
    second.restore();

    let session = second.snapshot();
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.display_name(), Some("admin"));
}
