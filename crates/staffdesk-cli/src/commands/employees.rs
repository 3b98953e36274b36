use crate::commands::prompt::StdinConfirmation;
use crate::commands::render;
use crate::context::AppContext;
use anyhow::{Context, Result};
use colored::Colorize;
use staffdesk_application::record_list::{
    AlwaysConfirm, DeleteConfirmation, DeleteOutcome, FetchOutcome, ListSettings,
};
use staffdesk_application::{EmployeeFormUseCase, RecordListController};
use staffdesk_core::employee::{EmployeeDraft, EmployeeId, SortKey};
use std::path::Path;

fn controller(ctx: &AppContext) -> RecordListController {
    RecordListController::new(
        ctx.employees.clone(),
        ctx.session.subscribe(),
        ListSettings::from_config(&ctx.config),
    )
}

fn read_draft(path: &Path) -> Result<EmployeeDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid employee JSON in {}", path.display()))
}

/// Converts the 1-based page number shown to users into a page index.
fn page_index(page: i64) -> i64 {
    page.saturating_sub(1)
}

pub async fn list(
    ctx: &AppContext,
    search: Option<String>,
    sort: Option<SortKey>,
    page: i64,
) -> Result<()> {
    ctx.require_session()?;
    let list = controller(ctx);

    let search = search.filter(|s| !s.trim().is_empty()).unwrap_or_default();
    list.load(search, sort).await?;

    let index = page_index(page);
    if index != 0 && list.set_page(index).await? == FetchOutcome::Ignored {
        println!(
            "{}",
            format!(
                "Page {} does not exist; showing page 1 of {}.",
                page,
                list.view().total_pages().max(1)
            )
            .yellow()
        );
    }

    render::list_view(&list.view());
    Ok(())
}

pub async fn show(ctx: &AppContext, id: EmployeeId) -> Result<()> {
    ctx.require_session()?;
    let form = EmployeeFormUseCase::new(ctx.employees.clone());
    let (employee, _draft) = form.load(id).await?;
    render::employee(&employee);
    Ok(())
}

pub async fn add(ctx: &AppContext, file: &Path) -> Result<()> {
    ctx.require_session()?;
    let draft = read_draft(file)?;
    let form = EmployeeFormUseCase::new(ctx.employees.clone());
    let created = form.create(&draft).await?;
    println!("{}", format!("Employee added: {} (#{})", created.name, created.id).green());
    Ok(())
}

pub async fn edit(ctx: &AppContext, id: EmployeeId, file: &Path) -> Result<()> {
    ctx.require_session()?;
    let draft = read_draft(file)?;
    let form = EmployeeFormUseCase::new(ctx.employees.clone());
    let updated = form.update(id, &draft).await?;
    println!("{}", format!("Employee updated: {} (#{})", updated.name, updated.id).green());
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: EmployeeId, yes: bool) -> Result<()> {
    ctx.require_session()?;
    let list = controller(ctx);
    // Best effort: the current page gives the prompt a name to show.
    if let Err(e) = list.refresh().await {
        tracing::debug!("[Cli] Could not load list before delete: {}", e);
    }

    let confirmation: &dyn DeleteConfirmation = if yes { &AlwaysConfirm } else { &StdinConfirmation };
    match list.delete_record(id, confirmation).await? {
        DeleteOutcome::Cancelled => println!("Delete cancelled."),
        DeleteOutcome::Deleted { .. } => {
            println!("{}", format!("Employee #{id} deleted.").green())
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index() {
        assert_eq!(page_index(1), 0);
        assert_eq!(page_index(3), 2);
        assert_eq!(page_index(i64::MIN), i64::MIN);
    }
}
