//! Session domain module.
//!
//! This module contains the authenticated-identity model, the persisted
//! storage interface, and the manager that owns the session lifecycle.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `Identity`, `Role`)
//! - `storage`: Storage trait for the persisted identity
//! - `manager`: Session lifecycle management (`SessionManager`)
//!
//! # Usage
//!
//! ```ignore
//! use staffdesk_core::session::{Session, SessionManager, SessionStorage};
//! ```

mod manager;
mod model;
mod storage;

// Re-export public API
pub use manager::SessionManager;
pub use model::{Identity, Profile, Role, Session};
pub use storage::{PersistedIdentity, SessionStorage};
