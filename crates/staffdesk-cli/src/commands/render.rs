//! Plain-text rendering of records and list pages.

use colored::Colorize;
use staffdesk_application::ListView;
use staffdesk_core::employee::Employee;

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

pub fn list_view(view: &ListView) {
    if view.items().is_empty() {
        println!("No employees found.");
    } else {
        println!(
            "{}",
            format!("{:>6}  {:<28} {:<18} {:<20}", "ID", "NAME", "DEPARTMENT", "ROLE").bold()
        );
        for employee in view.items() {
            println!(
                "{:>6}  {:<28} {:<18} {:<20}",
                employee.id,
                employee.name,
                or_dash(employee.department.as_deref()),
                or_dash(employee.company_role.as_deref()),
            );
        }
    }

    let total = view.total_pages().max(1);
    println!(
        "{}",
        format!("Page {} of {}", view.query.page_index + 1, total).dimmed()
    );
    if view.can_manage {
        println!("{}", "Admin: add, edit and delete are available.".dimmed());
    }
}

pub fn employee(employee: &Employee) {
    println!("{} {}", employee.name.bold(), format!("#{}", employee.id).dimmed());
    let salary = employee.salary.map(|s| format!("{s:.2}"));
    let joined = employee.joined_date.map(|d| d.to_string());
    let rows = [
        ("Email", employee.email.as_deref()),
        ("Phone", employee.phone.as_deref()),
        ("Department", employee.department.as_deref()),
        ("Role", employee.company_role.as_deref()),
        ("Education", employee.education.as_deref()),
        ("Marital status", employee.marital_status.as_deref()),
        ("Address", employee.address.as_deref()),
        ("Username", employee.username.as_deref()),
        ("Salary", salary.as_deref()),
        ("Joined", joined.as_deref()),
    ];
    for (label, value) in rows {
        println!("  {:<15} {}", format!("{label}:"), or_dash(value));
    }
}
