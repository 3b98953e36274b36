//! Auth service interface.
//!
//! The login and password-reset service is external; this module only
//! describes the boundary the client consumes.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

/// Client for the external authentication service.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a token and role.
    ///
    /// Fails with `InvalidCredentials` or a network/server error.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    /// Asks the service to e-mail a reset link.
    async fn request_password_reset(&self, email: &str) -> Result<()>;

    /// Sets a new password using a reset token.
    ///
    /// Fails with `InvalidOrExpiredToken` when the token is unknown or stale.
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<()>;
}
