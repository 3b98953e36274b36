//! Employee record domain model.
//!
//! Only `id` and `name` matter to the client logic; every other field is
//! carried through untouched for display and forms.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the record service.
pub type EmployeeId = i64;

/// A single employee as exposed by the record API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub company_role: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    /// Image URL or data URI; opaque to the client
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub joined_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Employee {
    /// Minimal record, mostly useful for tests and placeholders.
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            department: None,
            phone: None,
            address: None,
            marital_status: None,
            education: None,
            company_role: None,
            salary: None,
            photo: None,
            username: None,
            joined_date: None,
            created_at: None,
        }
    }

    /// First character of the name, shown when there is no photo.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// Copies the editable fields into a draft for the edit form.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            marital_status: self.marital_status.clone(),
            education: self.education.clone(),
            company_role: self.company_role.clone(),
            salary: self.salary,
            photo: self.photo.clone(),
            username: self.username.clone(),
            joined_date: self.joined_date,
        }
    }
}

/// Form payload for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_date: Option<NaiveDate>,
}
