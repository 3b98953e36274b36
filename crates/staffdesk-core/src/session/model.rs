//! Session domain model.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Role granted to the authenticated user.
///
/// The server speaks `ADMIN` / `USER`; anything that isn't an admin is treated
/// as a standard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    #[strum(serialize = "ADMIN")]
    Admin,
    #[serde(rename = "USER")]
    #[strum(serialize = "USER")]
    Standard,
}

impl Role {
    /// Parses the role string returned by the auth service.
    pub fn from_wire(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("ADMIN") {
            Role::Admin
        } else {
            Role::Standard
        }
    }

    /// Whether create/edit/delete controls should be shown for this role.
    pub fn can_manage_records(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Lower-case label used on profile and navigation views.
    pub fn label(&self) -> String {
        self.as_ref().to_lowercase()
    }
}

/// The authenticated identity. Token, role and username are always set or
/// cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub token: String,
    pub role: Role,
    pub username: String,
}

/// Profile information derived from the session, for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub role_label: String,
}

/// In-memory representation of the current authenticated identity.
///
/// `loading_phase` is true only until the first restore from storage has
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub loading_phase: bool,
}

impl Session {
    /// The state a freshly constructed manager starts in.
    pub fn initial() -> Self {
        Self {
            identity: None,
            loading_phase: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.username.as_str())
    }

    /// True when the current user may create, edit or delete records.
    pub fn can_manage_records(&self) -> bool {
        self.role().is_some_and(|r| r.can_manage_records())
    }

    pub fn profile(&self) -> Option<Profile> {
        self.identity.as_ref().map(|i| Profile {
            username: i.username.clone(),
            role_label: i.role.label(),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::initial()
    }
}
