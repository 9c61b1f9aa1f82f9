// ABOUTME: CLI commands for provider accounts
// ABOUTME: Register, login and the seeker search dashboard

use clap::Subcommand;
use colored::*;
use freelink_cli::render::seeker_table;
use freelink_cli::{AlreadyReported, AppContext};
use freelink_core::{AuthFormFields, Notifier, SearchCriteria, UserType};

use super::prompt::{new_password_or_prompt, password_or_prompt, text_or_prompt};
use super::session::already_logged_in;

#[derive(Subcommand)]
pub enum ProviderCommands {
    /// Create a provider account
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Log in as a provider
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Search seekers (requires a provider session)
    Dashboard {
        /// Skill to look for
        #[arg(long)]
        skill: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Full-time, Part-time or Contract
        #[arg(long)]
        time_period: Option<String>,
        /// Minimum rating
        #[arg(long)]
        rating: Option<f64>,
    },
}

pub async fn handle_provider_command(ctx: &AppContext, cmd: ProviderCommands) -> anyhow::Result<()> {
    match cmd {
        ProviderCommands::Register {
            name,
            email,
            password,
            phone,
        } => {
            println!("{}", "Create a provider account".blue().bold());
            let form = AuthFormFields {
                name: Some(text_or_prompt(name, "Name:")?),
                phone_number: Some(text_or_prompt(phone, "Phone number:")?),
                ..AuthFormFields::new(
                    text_or_prompt(email, "Email:")?,
                    new_password_or_prompt(password)?,
                )
            };

            ctx.api.provider().register(&form).await?;
            println!("{}", "Run 'freelink provider login' to sign in".dimmed());
            Ok(())
        }
        ProviderCommands::Login { email, password } => {
            if already_logged_in(ctx, UserType::Provider) {
                return Ok(());
            }
            let email = text_or_prompt(email, "Email:")?;
            let password = password_or_prompt(password)?;

            let user = ctx.session.provider_login(&email, &password).await?;
            println!("Welcome, {}", user.name.bold());
            Ok(())
        }
        ProviderCommands::Dashboard {
            skill,
            location,
            time_period,
            rating,
        } => {
            let criteria = SearchCriteria {
                skill: skill.unwrap_or_default(),
                location: location.unwrap_or_default(),
                time_period: time_period.unwrap_or_default(),
                rating: rating.map(|r| r.to_string()).unwrap_or_default(),
            };
            dashboard(ctx, &criteria).await
        }
    }
}

async fn dashboard(ctx: &AppContext, criteria: &SearchCriteria) -> anyhow::Result<()> {
    if !ctx.session.check_authentication() {
        return Err(AlreadyReported("not logged in".to_string()).into());
    }
    if ctx.session.user_type() != Some(UserType::Provider) {
        ctx.notifier.error("Please login as a provider to search seekers");
        return Err(AlreadyReported("not a provider session".to_string()).into());
    }

    let seekers = match ctx.api.provider().search_seekers(criteria).await {
        Ok(seekers) => seekers,
        Err(e) => {
            ctx.notifier.error("Search failed. Please try again.");
            return Err(e.into());
        }
    };

    if seekers.is_empty() {
        println!("{}", "No seekers match your filters".yellow());
        return Ok(());
    }

    println!("{}", "Available seekers".blue().bold());
    println!("{}", seeker_table(&seekers));
    println!("Found {} matching results", seekers.len().to_string().cyan());
    Ok(())
}
