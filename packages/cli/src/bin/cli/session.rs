// ABOUTME: Session-wide commands shared by both account types
// ABOUTME: Status display, logout and the already-logged-in guard used by login commands

use colored::*;
use freelink_cli::render::{rows_to_lines, status_rows};
use freelink_cli::AppContext;
use freelink_core::UserType;

/// True (and tells the user) when a session of `role` already exists
pub fn already_logged_in(ctx: &AppContext, role: UserType) -> bool {
    match ctx.session.user() {
        Some(user) if user.user_type == role => {
            println!(
                "{} Already logged in as {}",
                "ℹ".cyan(),
                user.email.bold()
            );
            true
        }
        _ => false,
    }
}

pub fn status(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let snapshot = ctx.session.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", "Freelink session".blue().bold());
    for line in rows_to_lines(&status_rows(&snapshot, &ctx.config)) {
        println!("  {}", line);
    }
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> anyhow::Result<()> {
    if !ctx.session.is_authenticated() {
        println!("{}", "Not logged in".yellow());
    }
    ctx.session.logout().await?;
    Ok(())
}
