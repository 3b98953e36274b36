//! Record API client trait.
//!
//! The record service and its persistence are external. This trait is the
//! boundary the list controller and form use cases consume, so they can be
//! driven by an HTTP client in production and by mocks in tests.

use super::model::{Employee, EmployeeDraft, EmployeeId};
use super::page::{Page, PageQuery};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Fetches one page of records matching the query.
    ///
    /// # Errors
    ///
    /// Network or server failures.
    async fn list_records(&self, query: &PageQuery) -> Result<Page<Employee>>;

    /// Fetches a single record.
    ///
    /// # Errors
    ///
    /// `NotFound` when the record doesn't exist, otherwise network failures.
    async fn get_record(&self, id: EmployeeId) -> Result<Employee>;

    /// Creates a record. Requires the admin role on the server side.
    async fn create_record(&self, draft: &EmployeeDraft) -> Result<Employee>;

    /// Replaces a record. Requires the admin role on the server side.
    async fn update_record(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<Employee>;

    /// Deletes a record. Requires the admin role on the server side.
    async fn delete_record(&self, id: EmployeeId) -> Result<()>;
}
