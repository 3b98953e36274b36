//! HTTP clients for the external record and auth services.

mod auth_api;
mod client;
mod employee_api;

pub use auth_api::HttpAuthApi;
pub use client::{Anonymous, ApiClient, TokenProvider};
pub use employee_api::HttpEmployeeApi;
