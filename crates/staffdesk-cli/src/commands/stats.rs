use crate::context::AppContext;
use anyhow::Result;
use colored::Colorize;
use staffdesk_application::DashboardUseCase;
use staffdesk_core::employee::DashboardShortcut;

pub async fn show(ctx: &AppContext) -> Result<()> {
    let session = ctx.require_session()?;
    let dashboard = DashboardUseCase::from_config(ctx.employees.clone(), &ctx.config);
    let stats = dashboard.stats(chrono::Local::now().date_naive()).await?;

    if let Some(name) = session.display_name() {
        println!("Welcome back, {}", name.bold());
    }

    let cards = [
        ("Total employees", stats.total_employees, DashboardShortcut::AllEmployees),
        ("Departments", stats.departments, DashboardShortcut::Departments),
        (
            "Recent hires",
            stats.recent_hires,
            DashboardShortcut::RecentHires,
        ),
    ];
    for (label, count, shortcut) in cards {
        let hint = match shortcut.sort_key() {
            Some(key) => format!("staffdesk list --sort {key}"),
            None => "staffdesk list".to_string(),
        };
        println!("  {:<16} {:>6}   {}", label, count.to_string().bold(), hint.dimmed());
    }
    Ok(())
}
