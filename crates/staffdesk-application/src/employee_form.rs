//! Employee form use case: load a record for editing, create, update.

use staffdesk_core::employee::{Employee, EmployeeApi, EmployeeDraft, EmployeeId};
use staffdesk_core::{Result, StaffdeskError};
use std::sync::Arc;

/// Backs the add and edit forms.
///
/// Drafts are borrowed, never consumed, so a failed submit leaves the form
/// contents with the caller for another attempt.
pub struct EmployeeFormUseCase {
    api: Arc<dyn EmployeeApi>,
}

impl EmployeeFormUseCase {
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self { api }
    }

    /// Loads a record and returns it with a draft prefilled from it.
    ///
    /// # Errors
    ///
    /// `NotFound` when the record is gone; the caller should leave the
    /// detail view.
    pub async fn load(&self, id: EmployeeId) -> Result<(Employee, EmployeeDraft)> {
        let employee = self.api.get_record(id).await.inspect_err(|e| {
            tracing::warn!("[EmployeeForm] Failed to load employee {}: {}", id, e);
        })?;
        let draft = employee.to_draft();
        Ok((employee, draft))
    }

    /// Submits a new record.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty name (no request is sent), otherwise
    /// whatever the record service reports.
    pub async fn create(&self, draft: &EmployeeDraft) -> Result<Employee> {
        Self::check_draft(draft)?;
        let created = self.api.create_record(draft).await?;
        tracing::info!("[EmployeeForm] Created employee {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Submits changes to an existing record.
    pub async fn update(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<Employee> {
        Self::check_draft(draft)?;
        let updated = self.api.update_record(id, draft).await?;
        tracing::info!("[EmployeeForm] Updated employee {}", id);
        Ok(updated)
    }

    fn check_draft(draft: &EmployeeDraft) -> Result<()> {
        if draft.name.trim().is_empty() {
            return Err(StaffdeskError::validation("Name is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use staffdesk_core::employee::{Page, PageQuery};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockApi {
        records: Mutex<HashMap<EmployeeId, Employee>>,
        next_id: Mutex<EmployeeId>,
        deny_mutations: bool,
    }

    impl MockApi {
        fn new(deny_mutations: bool) -> Self {
            let mut records = HashMap::new();
            let mut alice = Employee::new(1, "Alice");
            alice.department = Some("Engineering".to_string());
            records.insert(1, alice);
            Self {
                records: Mutex::new(records),
                next_id: Mutex::new(2),
                deny_mutations,
            }
        }
    }

    fn apply(id: EmployeeId, draft: &EmployeeDraft) -> Employee {
        let mut employee = Employee::new(id, draft.name.clone());
        employee.department = draft.department.clone();
        employee
    }

    #[async_trait]
    impl EmployeeApi for MockApi {
        async fn list_records(&self, _query: &PageQuery) -> Result<Page<Employee>> {
            Ok(Page::empty())
        }

        async fn get_record(&self, id: EmployeeId) -> Result<Employee> {
            self.records
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| StaffdeskError::not_found("employee", id.to_string()))
        }

        async fn create_record(&self, draft: &EmployeeDraft) -> Result<Employee> {
            if self.deny_mutations {
                return Err(StaffdeskError::denied("add"));
            }
            let mut next_id = self.next_id.lock().unwrap();
            let employee = apply(*next_id, draft);
            self.records.lock().unwrap().insert(*next_id, employee.clone());
            *next_id += 1;
            Ok(employee)
        }

        async fn update_record(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<Employee> {
            if self.deny_mutations {
                return Err(StaffdeskError::denied("edit"));
            }
            let mut records = self.records.lock().unwrap();
            if !records.contains_key(&id) {
                return Err(StaffdeskError::not_found("employee", id.to_string()));
            }
            let employee = apply(id, draft);
            records.insert(id, employee.clone());
            Ok(employee)
        }

        async fn delete_record(&self, _id: EmployeeId) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_prefills_draft() {
        let form = EmployeeFormUseCase::new(Arc::new(MockApi::new(false)));
        let (employee, draft) = form.load(1).await.unwrap();

        assert_eq!(employee.name, "Alice");
        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.department.as_deref(), Some("Engineering"));
    }

    #[tokio::test]
    async fn test_load_missing_record() {
        let form = EmployeeFormUseCase::new(Arc::new(MockApi::new(false)));
        let err = form.load(42).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let form = EmployeeFormUseCase::new(Arc::new(MockApi::new(false)));
        let mut draft = EmployeeDraft {
            name: "Bob".to_string(),
            ..Default::default()
        };

        let created = form.create(&draft).await.unwrap();
        assert_eq!(created.id, 2);

        draft.department = Some("Sales".to_string());
        let updated = form.update(created.id, &draft).await.unwrap();
        assert_eq!(updated.department.as_deref(), Some("Sales"));
    }

    #[tokio::test]
    async fn test_blank_name_rejected_locally() {
        let form = EmployeeFormUseCase::new(Arc::new(MockApi::new(false)));
        let draft = EmployeeDraft {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            form.create(&draft).await,
            Err(StaffdeskError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_denied_mutation_keeps_draft() {
        let form = EmployeeFormUseCase::new(Arc::new(MockApi::new(true)));
        let draft = EmployeeDraft {
            name: "Carol".to_string(),
            ..Default::default()
        };

        let err = form.update(1, &draft).await.unwrap_err();
        assert_eq!(
            err.user_message(),
            "Permission denied: Only Admins can edit employees"
        );
        // Still ours to resubmit.
        assert_eq!(draft.name, "Carol");
    }
}
