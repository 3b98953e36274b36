//! Record list module.
//!
//! # Module Structure
//!
//! - `controller`: Debounced search, pagination, sort and optimistic delete
//! - `view`: Snapshot and outcome types handed to the presentation layer

mod controller;
mod view;

pub use controller::{ListSettings, RecordListController};
pub use view::{AlwaysConfirm, DeleteConfirmation, DeleteOutcome, FetchOutcome, ListView};
