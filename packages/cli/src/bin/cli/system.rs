// ABOUTME: CLI commands for backend database administration
// ABOUTME: Initialize the schema or probe the database connection

use clap::Subcommand;
use colored::*;
use freelink_api::SystemStatus;
use freelink_cli::{AlreadyReported, AppContext};
use serde_json::Value;

#[derive(Subcommand)]
pub enum SystemCommands {
    /// Create the backend database tables
    InitDb,
    /// Check that the backend can reach its database
    TestDb,
}

pub async fn handle_system_command(ctx: &AppContext, cmd: SystemCommands) -> anyhow::Result<()> {
    let status = match cmd {
        SystemCommands::InitDb => ctx.api.system().init_database().await?,
        SystemCommands::TestDb => ctx.api.system().test_db_connection().await?,
    };
    report(&status)
}

fn report(status: &SystemStatus) -> anyhow::Result<()> {
    if !status.success {
        let reason = status.error.clone().unwrap_or_default();
        return Err(AlreadyReported(reason).into());
    }

    for key in ["server_info", "database_name"] {
        if let Some(value) = status.data.get(key).and_then(Value::as_str) {
            println!("  {} {}", format!("{}:", key).dimmed(), value);
        }
    }
    Ok(())
}
