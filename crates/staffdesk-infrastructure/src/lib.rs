//! Infrastructure layer: HTTP clients, storage backends, configuration
//! loading and logging setup.

pub mod http;
pub mod logging;
pub mod paths;
pub mod storage;

pub use crate::http::{ApiClient, HttpAuthApi, HttpEmployeeApi};
pub use crate::storage::{ConfigStorage, FileSessionStorage, MemorySessionStorage};
