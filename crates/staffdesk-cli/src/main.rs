use clap::{Parser, Subcommand};
use colored::Colorize;
use staffdesk_core::StaffdeskError;
use staffdesk_core::employee::{EmployeeId, SortKey};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

#[derive(Parser)]
#[command(name = "staffdesk")]
#[command(about = "Staffdesk - employee records admin console", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long, short)]
        username: String,
        /// Prompted on stdin when omitted
        #[arg(long, short)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List employees
    List {
        /// Filter by name
        #[arg(long, short)]
        search: Option<String>,
        /// Sort as `field,asc|desc`, e.g. `joinedDate,desc`
        #[arg(long)]
        sort: Option<SortKey>,
        /// 1-based page number
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        page: i64,
    },
    /// Show one employee
    Show { id: EmployeeId },
    /// Create an employee from a JSON draft
    Add {
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace an employee's fields from a JSON draft
    Edit {
        id: EmployeeId,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete an employee
    Delete {
        id: EmployeeId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Dashboard counters
    Stats,
    /// Request a password reset link
    ForgotPassword { email: String },
    /// Set a new password with a reset token
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = match err.downcast_ref::<StaffdeskError>() {
                Some(e) => e.user_message(),
                None => format!("{err:#}"),
            };
            eprintln!("{}", message.red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = context::AppContext::build(cli.config)?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&ctx, &username, password).await?
        }
        Commands::Logout => commands::auth::logout(&ctx),
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::List { search, sort, page } => {
            commands::employees::list(&ctx, search, sort, page).await?
        }
        Commands::Show { id } => commands::employees::show(&ctx, id).await?,
        Commands::Add { file } => commands::employees::add(&ctx, &file).await?,
        Commands::Edit { id, file } => commands::employees::edit(&ctx, id, &file).await?,
        Commands::Delete { id, yes } => commands::employees::delete(&ctx, id, yes).await?,
        Commands::Stats => commands::stats::show(&ctx).await?,
        Commands::ForgotPassword { email } => commands::auth::forgot_password(&ctx, &email).await?,
        Commands::ResetPassword {
            token,
            password,
            confirm,
        } => commands::auth::reset_password(&ctx, &token, &password, &confirm).await?,
    }

    Ok(())
}
