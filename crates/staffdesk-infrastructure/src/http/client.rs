//! Shared HTTP plumbing for the record and auth API clients.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use staffdesk_core::config::ClientConfig;
use staffdesk_core::session::Session;
use staffdesk_core::{Result, StaffdeskError};
use std::time::Duration;
use tokio::sync::watch;

/// Source of the bearer token attached to record requests.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

impl TokenProvider for watch::Receiver<Session> {
    fn bearer_token(&self) -> Option<String> {
        self.borrow().token().map(str::to_string)
    }
}

/// No token at all; used by the auth client, whose endpoints are public.
pub struct Anonymous;

impl TokenProvider for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// A configured `reqwest` client bound to the service base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with the configured base URL and request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StaffdeskError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        tokens: &dyn TokenProvider,
    ) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match tokens.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Sends the request, mapping transport failures onto the error taxonomy.
pub(crate) async fn send(builder: RequestBuilder) -> Result<Response> {
    builder.send().await.map_err(map_transport_error)
}

pub(crate) fn map_transport_error(err: reqwest::Error) -> StaffdeskError {
    if err.is_timeout() {
        StaffdeskError::Timeout
    } else if err.is_decode() {
        StaffdeskError::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    } else {
        StaffdeskError::network(err.to_string())
    }
}

/// What a request was trying to do, used to pick the right error variant.
pub(crate) enum RequestKind<'a> {
    /// Read of a collection
    List,
    /// Read of one entity
    Fetch { entity_type: &'static str, id: &'a str },
    /// Mutation that needs the admin role; `action` names it for the message
    Mutation {
        action: &'static str,
        entity_type: &'static str,
        id: Option<&'a str>,
    },
}

/// Turns a non-success response into an error, consuming the body as the
/// message.
pub(crate) async fn error_from_response(response: Response, kind: RequestKind<'_>) -> StaffdeskError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    map_status(status, body, kind)
}

pub(crate) fn map_status(status: StatusCode, body: String, kind: RequestKind<'_>) -> StaffdeskError {
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        body
    };

    match (status, kind) {
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, RequestKind::Mutation { action, .. }) => {
            StaffdeskError::denied(action)
        }
        (StatusCode::NOT_FOUND, RequestKind::Fetch { entity_type, id })
        | (
            StatusCode::NOT_FOUND,
            RequestKind::Mutation {
                entity_type,
                id: Some(id),
                ..
            },
        ) => StaffdeskError::not_found(entity_type, id),
        (StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY, _) => {
            StaffdeskError::validation(message)
        }
        _ => StaffdeskError::server(status.as_u16(), message),
    }
}

/// Returns the response when successful, the mapped error otherwise.
pub(crate) async fn check(response: Response, kind: RequestKind<'_>) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(error_from_response(response, kind).await)
    }
}
