use clap::{Parser, Subcommand};
use colored::*;
use freelink_cli::error::was_reported;
use freelink_cli::{AppContext, ConsoleNotifier};
use freelink_config::ClientConfig;
use std::process;
use std::sync::Arc;

mod cli;

use cli::provider::ProviderCommands;
use cli::seeker::SeekerCommands;
use cli::system::SystemCommands;

#[derive(Parser)]
#[command(name = "freelink")]
#[command(about = "Freelink CLI - connect service providers with seekers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provider accounts: register, login and search seekers
    #[command(subcommand)]
    Provider(ProviderCommands),
    /// Seeker accounts: register, login and view profiles
    #[command(subcommand)]
    Seeker(SeekerCommands),
    /// Show who is logged in and where the client points
    Status {
        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },
    /// Log out and forget the stored session
    Logout,
    /// Database administration helpers
    #[command(subcommand)]
    System(SystemCommands),
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        if !was_reported(&e) {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
        }
        process::exit(1);
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let ctx = AppContext::new(config, Arc::new(ConsoleNotifier::new()));
    ctx.session.restore().await;

    match command {
        Commands::Provider(cmd) => cli::provider::handle_provider_command(&ctx, cmd).await,
        Commands::Seeker(cmd) => cli::seeker::handle_seeker_command(&ctx, cmd).await,
        Commands::Status { json } => cli::session::status(&ctx, json),
        Commands::Logout => cli::session::logout(&ctx).await,
        Commands::System(cmd) => cli::system::handle_system_command(&ctx, cmd).await,
    }
}
