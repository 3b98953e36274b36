mod config_storage;
mod session_storage;

pub use config_storage::{API_URL_ENV, ConfigStorage};
pub use session_storage::{FileSessionStorage, MemorySessionStorage};
