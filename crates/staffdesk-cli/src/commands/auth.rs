use crate::commands::prompt::read_line;
use crate::context::AppContext;
use anyhow::Result;
use colored::Colorize;
use staffdesk_application::PasswordResetUseCase;
use staffdesk_core::access::evaluate_public;

pub async fn login(ctx: &AppContext, username: &str, password: Option<String>) -> Result<()> {
    let current = ctx.session.snapshot();
    if evaluate_public(&current).is_some() {
        let name = current.display_name().unwrap_or_default();
        println!("Already signed in as {}. Run `staffdesk logout` first to switch users.", name.bold());
        return Ok(());
    }

    let password = match password {
        Some(password) => password,
        None => read_line("Password: ")?,
    };

    let session = ctx.session.establish(username, &password).await?;
    if let Some(profile) = session.profile() {
        println!(
            "{}",
            format!("Signed in as {} ({})", profile.username, profile.role_label).green()
        );
    }
    Ok(())
}

pub fn logout(ctx: &AppContext) {
    ctx.session.clear();
    println!("Signed out.");
}

pub fn whoami(ctx: &AppContext) {
    match ctx.session.snapshot().profile() {
        Some(profile) => println!("{} ({})", profile.username.bold(), profile.role_label),
        None => println!("Not signed in."),
    }
}

pub async fn forgot_password(ctx: &AppContext, email: &str) -> Result<()> {
    let reset = PasswordResetUseCase::new(ctx.auth.clone());
    reset.request_reset(email).await?;
    println!("{}", "Password reset link sent to your email.".green());
    Ok(())
}

pub async fn reset_password(
    ctx: &AppContext,
    token: &str,
    password: &str,
    confirmation: &str,
) -> Result<()> {
    let reset = PasswordResetUseCase::new(ctx.auth.clone());
    reset.reset(token, password, confirmation).await?;
    println!(
        "{}",
        "Password reset successfully. You can now sign in.".green()
    );
    Ok(())
}
