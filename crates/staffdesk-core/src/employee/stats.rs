//! Dashboard statistics over a sample of records.

use super::model::Employee;
use super::page::SortKey;
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub departments: usize,
    pub recent_hires: usize,
}

impl DashboardStats {
    /// Computes the dashboard counters.
    ///
    /// A hire is recent when its joined date falls within `recent_days` days
    /// before (or on) `today`. Records without a joined date never count.
    pub fn compute(employees: &[Employee], today: NaiveDate, recent_days: u32) -> Self {
        let departments: HashSet<&str> = employees
            .iter()
            .filter_map(|e| e.department.as_deref())
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect();

        let recent_hires = employees
            .iter()
            .filter_map(|e| e.joined_date)
            .filter(|joined| {
                let age = today.signed_duration_since(*joined).num_days();
                (0..=i64::from(recent_days)).contains(&age)
            })
            .count();

        Self {
            total_employees: employees.len(),
            departments: departments.len(),
            recent_hires,
        }
    }
}

/// Dashboard cards that jump into the list with a preset sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardShortcut {
    AllEmployees,
    RecentHires,
    Departments,
}

impl DashboardShortcut {
    pub fn sort_key(&self) -> Option<SortKey> {
        match self {
            DashboardShortcut::AllEmployees => None,
            DashboardShortcut::RecentHires => Some(SortKey::desc("joinedDate")),
            DashboardShortcut::Departments => Some(SortKey::asc("department")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, department: Option<&str>, joined: Option<NaiveDate>) -> Employee {
        let mut e = Employee::new(id, format!("Employee {id}"));
        e.department = department.map(str::to_string);
        e.joined_date = joined;
        e
    }

    #[test]
    fn test_compute_counts() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let employees = vec![
            employee(1, Some("Engineering"), NaiveDate::from_ymd_opt(2024, 6, 20)),
            employee(2, Some("Engineering"), NaiveDate::from_ymd_opt(2023, 1, 1)),
            employee(3, Some("Sales"), None),
            employee(4, Some("  "), NaiveDate::from_ymd_opt(2024, 6, 30)),
            employee(5, None, NaiveDate::from_ymd_opt(2024, 7, 2)),
        ];

        let stats = DashboardStats::compute(&employees, today, 30);

        assert_eq!(stats.total_employees, 5);
        assert_eq!(stats.departments, 2);
        // Future joined dates are not "recent" yet.
        assert_eq!(stats.recent_hires, 2);
    }

    #[test]
    fn test_shortcut_sort_keys() {
        assert_eq!(DashboardShortcut::AllEmployees.sort_key(), None);
        assert_eq!(
            DashboardShortcut::RecentHires.sort_key().unwrap().to_string(),
            "joinedDate,desc"
        );
        assert_eq!(
            DashboardShortcut::Departments.sort_key().unwrap().to_string(),
            "department,asc"
        );
    }
}
