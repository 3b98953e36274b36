//! Employee record module.
//!
//! # Module Structure
//!
//! - `model`: Record and form draft types
//! - `page`: Paging query/result and sort key
//! - `api`: Client trait for the external record service
//! - `stats`: Dashboard counters

mod api;
mod model;
mod page;
mod stats;

// Re-export public API
pub use api::EmployeeApi;
pub use model::{Employee, EmployeeDraft, EmployeeId};
pub use page::{Page, PageQuery, SortDirection, SortKey};
pub use stats::{DashboardShortcut, DashboardStats};
