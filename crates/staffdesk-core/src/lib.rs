//! Domain layer of the Staffdesk client.
//!
//! Holds the session model and manager, the access gate, the employee record
//! types, and the traits for the external record and auth services. Nothing
//! in here performs I/O on its own.

pub mod access;
pub mod auth;
pub mod config;
pub mod employee;
pub mod error;
pub mod session;

// Re-export common error type
pub use error::{ErrorCategory, Result, StaffdeskError};
