//! Application layer for Staffdesk.
//!
//! Use cases that sit between the domain types in `staffdesk-core` and a
//! presentation layer: the record list controller, the employee form, the
//! password reset flow and the dashboard counters.

pub mod dashboard;
pub mod employee_form;
pub mod password_reset;
pub mod record_list;

pub use dashboard::DashboardUseCase;
pub use employee_form::EmployeeFormUseCase;
pub use password_reset::PasswordResetUseCase;
pub use record_list::{ListSettings, ListView, RecordListController};
