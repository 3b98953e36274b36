//! Access control for protected and public areas.
//!
//! The gate is a pure function of the current [`Session`]; nothing is cached
//! between evaluations.

use crate::session::Session;
use tokio::sync::watch;

/// Entry point a signed-in user is sent to from public pages.
pub const HOME_PATH: &str = "/";

/// What the presentation layer should do with a protected area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session restore hasn't resolved yet; show a placeholder only.
    Loading,
    /// No identity; navigate to the login entry point.
    RedirectToLogin { login_path: String },
    /// Render the protected content.
    Render,
}

/// Decides how a protected area is handled for `session`.
pub fn evaluate(session: &Session, login_path: &str) -> AccessDecision {
    if session.loading_phase {
        AccessDecision::Loading
    } else if session.token().is_none() {
        AccessDecision::RedirectToLogin {
            login_path: login_path.to_string(),
        }
    } else {
        AccessDecision::Render
    }
}

/// Decides how a public page (login, password reset) is handled.
///
/// Returns the home path when the user is already signed in.
pub fn evaluate_public(session: &Session) -> Option<&'static str> {
    session.is_authenticated().then_some(HOME_PATH)
}

/// Gate bound to a live session feed.
pub struct AccessGate {
    session: watch::Receiver<Session>,
    login_path: String,
}

impl AccessGate {
    pub fn new(session: watch::Receiver<Session>, login_path: impl Into<String>) -> Self {
        Self {
            session,
            login_path: login_path.into(),
        }
    }

    /// Evaluates the gate against the current session.
    pub fn decision(&mut self) -> AccessDecision {
        let session = self.session.borrow_and_update();
        evaluate(&session, &self.login_path)
    }

    /// Waits for the next session change and returns the fresh decision.
    ///
    /// Returns `None` once the session manager has been dropped.
    pub async fn changed(&mut self) -> Option<AccessDecision> {
        self.session.changed().await.ok()?;
        Some(self.decision())
    }
}
