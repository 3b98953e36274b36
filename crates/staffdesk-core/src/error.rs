//! Error types for the Staffdesk client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Staffdesk client.
///
/// Every failure coming back from the external record and auth services is
/// mapped onto one of these variants so callers can tell an authorization
/// denial ("ask an admin") apart from a transient failure ("retry").
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StaffdeskError {
    /// Bad username/password at login
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The current role lacks permission for a mutation
    #[error("Permission denied: Only Admins can {action} employees")]
    AuthorizationDenied { action: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// Transport level failure (connection refused, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status from the remote service
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The remote service rejected the submitted data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Password reset token is unknown or past its expiry
    #[error("Invalid or expired reset token: {0}")]
    InvalidOrExpiredToken(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected login; the form shows a retryable error.
    AuthenticationFailure,
    /// Role lacks permission; not retried.
    AuthorizationDenied,
    /// Transient; last-good data stays on screen.
    NetworkOrServerFailure,
    /// Requested record is gone; caller navigates away.
    NotFound,
    Validation,
    Other,
}

impl StaffdeskError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
    }

    /// Creates an AuthorizationDenied error for the given action verb
    pub fn denied(action: impl Into<String>) -> Self {
        Self::AuthorizationDenied {
            action: action.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Server error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCredentials => ErrorCategory::AuthenticationFailure,
            Self::AuthorizationDenied { .. } => ErrorCategory::AuthorizationDenied,
            Self::Network(_) | Self::Server { .. } | Self::Timeout => {
                ErrorCategory::NetworkOrServerFailure
            }
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Validation(_) | Self::InvalidOrExpiredToken(_) => ErrorCategory::Validation,
            _ => ErrorCategory::Other,
        }
    }

    /// Check if this is an authorization denial
    pub fn is_authorization_denied(&self) -> bool {
        matches!(self, Self::AuthorizationDenied { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether resubmitting the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::NetworkOrServerFailure
    }

    /// Text shown to the user for this failure.
    ///
    /// Authorization denials keep their own wording so they never read like
    /// a transient failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials | Self::AuthorizationDenied { .. } => self.to_string(),
            Self::NotFound { entity_type, .. } => format!("The requested {entity_type} no longer exists"),
            Self::Network(_) | Self::Timeout => {
                "Could not reach the server. Please try again.".to_string()
            }
            Self::Server { .. } => "The server failed to handle the request. Please try again.".to_string(),
            Self::Validation(message) | Self::InvalidOrExpiredToken(message) => message.clone(),
            _ => self.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for StaffdeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for StaffdeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for StaffdeskError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for StaffdeskError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, StaffdeskError>`.
pub type Result<T> = std::result::Result<T, StaffdeskError>;
