//! Forgot-password and reset-password flows.

use staffdesk_core::auth::AuthApi;
use staffdesk_core::{Result, StaffdeskError};
use std::sync::Arc;

pub struct PasswordResetUseCase {
    auth: Arc<dyn AuthApi>,
}

impl PasswordResetUseCase {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    /// Asks the auth service to send a reset link to `email`.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank address, `NotFound` when no account uses it.
    pub async fn request_reset(&self, email: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(StaffdeskError::validation("Email is required"));
        }

        self.auth.request_password_reset(email).await?;
        tracing::info!("[PasswordReset] Reset link requested for {}", email);
        Ok(())
    }

    /// Sets a new password with the token from the reset link.
    ///
    /// A missing token or a confirmation that doesn't match is rejected
    /// without contacting the service.
    ///
    /// # Errors
    ///
    /// `Validation` for the local checks, `InvalidOrExpiredToken` from the
    /// service.
    pub async fn reset(&self, token: &str, new_password: &str, confirmation: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(StaffdeskError::validation("Invalid or missing reset token"));
        }
        if new_password.is_empty() {
            return Err(StaffdeskError::validation("Password is required"));
        }
        if new_password != confirmation {
            return Err(StaffdeskError::validation("Passwords do not match"));
        }

        self.auth.reset_password(token, new_password).await?;
        tracing::info!("[PasswordReset] Password reset completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use staffdesk_core::auth::LoginResponse;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockAuth {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AuthApi for MockAuth {
        async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse> {
            Err(StaffdeskError::InvalidCredentials)
        }

        async fn request_password_reset(&self, email: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("forgot:{email}"));
            if email == "alice@example.com" {
                Ok(())
            } else {
                Err(StaffdeskError::not_found("user", email))
            }
        }

        async fn reset_password(&self, token: &str, _new_password: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("reset:{token}"));
            if token == "valid" {
                Ok(())
            } else {
                Err(StaffdeskError::InvalidOrExpiredToken(
                    "Reset token has expired".to_string(),
                ))
            }
        }
    }

    fn use_case() -> (PasswordResetUseCase, Arc<MockAuth>) {
        let auth = Arc::new(MockAuth::default());
        (PasswordResetUseCase::new(auth.clone()), auth)
    }

    #[tokio::test]
    async fn test_request_reset() {
        let (reset, auth) = use_case();

        reset.request_reset(" alice@example.com ").await.unwrap();
        assert!(reset.request_reset("ghost@example.com").await.unwrap_err().is_not_found());
        assert!(matches!(
            reset.request_reset("  ").await,
            Err(StaffdeskError::Validation(_))
        ));

        assert_eq!(auth.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_mismatch_rejected_without_request() {
        let (reset, auth) = use_case();

        let err = reset.reset("valid", "abc", "abd").await.unwrap_err();
        assert_eq!(err, StaffdeskError::validation("Passwords do not match"));

        let err = reset.reset("", "abc", "abc").await.unwrap_err();
        assert_eq!(err, StaffdeskError::validation("Invalid or missing reset token"));

        assert!(auth.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reset_with_token() {
        let (reset, _auth) = use_case();

        reset.reset("valid", "n3w", "n3w").await.unwrap();

        let err = reset.reset("stale", "n3w", "n3w").await.unwrap_err();
        assert_eq!(err.user_message(), "Reset token has expired");
    }
}
