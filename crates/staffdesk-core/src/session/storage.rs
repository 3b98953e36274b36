//! Persisted identity storage trait.
//!
//! Defines the interface for the tab-scoped store that keeps the
//! authenticated identity alive across page reloads.

use super::model::{Identity, Role};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The persisted layout: three scalar fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedIdentity {
    pub token: String,
    pub role: String,
    pub username: String,
}

impl From<&Identity> for PersistedIdentity {
    fn from(identity: &Identity) -> Self {
        Self {
            token: identity.token.clone(),
            role: identity.role.to_string(),
            username: identity.username.clone(),
        }
    }
}

impl PersistedIdentity {
    /// Converts back into an identity.
    ///
    /// An empty token means nothing usable was persisted.
    pub fn into_identity(self) -> Option<Identity> {
        if self.token.is_empty() {
            return None;
        }
        Some(Identity {
            role: Role::from_wire(&self.role),
            token: self.token,
            username: self.username,
        })
    }
}

/// An abstract store for the persisted identity.
///
/// Only the session manager writes to it (`save` on login, `clear` on
/// logout); `load` is called once at startup.
///
/// # Implementation Notes
///
/// Implementations are synchronous: restoring must not involve a network
/// call or suspend the caller.
pub trait SessionStorage: Send + Sync {
    /// Reads the persisted identity.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(_))`: identity found
    /// - `Ok(None)`: nothing persisted (normal logged-out state)
    /// - `Err(_)`: the store could not be read
    fn load(&self) -> Result<Option<PersistedIdentity>>;

    /// Replaces the persisted identity.
    fn save(&self, identity: &PersistedIdentity) -> Result<()>;

    /// Erases the persisted identity. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_identity() {
        let identity = Identity {
            token: "jwt".to_string(),
            role: Role::Admin,
            username: "root".to_string(),
        };
        let persisted = PersistedIdentity::from(&identity);
        assert_eq!(persisted.role, "ADMIN");
        assert_eq!(persisted.into_identity(), Some(identity));
    }

    #[test]
    fn test_empty_token_is_not_an_identity() {
        let persisted = PersistedIdentity {
            token: String::new(),
            role: "ADMIN".to_string(),
            username: "root".to_string(),
        };
        assert_eq!(persisted.into_identity(), None);
    }
}
