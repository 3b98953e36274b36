//! HttpAuthApi - REST implementation of the login and password-reset service.

use super::client::{Anonymous, ApiClient, map_status, map_transport_error, send, RequestKind};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use staffdesk_core::auth::{AuthApi, LoginResponse};
use staffdesk_core::{Result, StaffdeskError};

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    token: &'a str,
    new_password: &'a str,
}

pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let request = self
            .client
            .request(Method::POST, "auth/login", &Anonymous)
            .json(&LoginRequest { username, password });

        let response = send(request).await?;
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(map_transport_error);
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StaffdeskError::InvalidCredentials,
            _ => map_status(status, body, RequestKind::List),
        })
    }

    async fn request_password_reset(&self, email: &str) -> Result<()> {
        let request = self
            .client
            .request(Method::POST, "auth/forgot-password", &Anonymous)
            .json(&ForgotPasswordRequest { email });

        let response = send(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => StaffdeskError::not_found("user", email),
            _ => map_status(status, body, RequestKind::List),
        })
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        let request = self
            .client
            .request(Method::POST, "auth/reset-password", &Anonymous)
            .json(&ResetPasswordRequest { token, new_password });

        let response = send(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::BAD_REQUEST if !body.trim().is_empty() => {
                StaffdeskError::InvalidOrExpiredToken(body)
            }
            StatusCode::BAD_REQUEST => {
                StaffdeskError::InvalidOrExpiredToken("Invalid or expired reset token".to_string())
            }
            _ => map_status(status, body, RequestKind::List),
        })
    }
}
