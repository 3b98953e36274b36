pub mod auth;
pub mod employees;
pub mod prompt;
pub mod render;
pub mod stats;
