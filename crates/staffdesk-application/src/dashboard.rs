//! Dashboard counters.

use chrono::NaiveDate;
use staffdesk_core::config::ClientConfig;
use staffdesk_core::employee::{DashboardStats, EmployeeApi, PageQuery};
use staffdesk_core::Result;
use std::sync::Arc;

pub struct DashboardUseCase {
    api: Arc<dyn EmployeeApi>,
    sample_size: usize,
    recent_hire_days: u32,
}

impl DashboardUseCase {
    pub fn new(api: Arc<dyn EmployeeApi>, sample_size: usize, recent_hire_days: u32) -> Self {
        Self {
            api,
            sample_size,
            recent_hire_days,
        }
    }

    pub fn from_config(api: Arc<dyn EmployeeApi>, config: &ClientConfig) -> Self {
        Self::new(api, config.dashboard_sample_size, config.recent_hire_days)
    }

    /// Fetches one large unfiltered page and counts over it.
    ///
    /// Counts cover at most `sample_size` records.
    pub async fn stats(&self, today: NaiveDate) -> Result<DashboardStats> {
        let query = PageQuery::first(self.sample_size);
        let page = self.api.list_records(&query).await?;

        let stats = DashboardStats::compute(&page.items, today, self.recent_hire_days);
        tracing::debug!(
            "[Dashboard] {} employees, {} departments, {} recent hires",
            stats.total_employees,
            stats.departments,
            stats.recent_hires
        );
        Ok(stats)
    }
}
