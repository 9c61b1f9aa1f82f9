// ABOUTME: CLI commands for seeker accounts
// ABOUTME: Register, login and profile display for the current or any seeker

use clap::Subcommand;
use colored::*;
use freelink_cli::render::{rows_to_lines, seeker_rows, user_rows};
use freelink_cli::{AlreadyReported, AppContext};
use freelink_core::{AuthFormFields, FormNumber, SeekerId, UserType};

use super::prompt::{new_password_or_prompt, optional_or_prompt, password_or_prompt, text_or_prompt};
use super::session::already_logged_in;

#[derive(Subcommand)]
pub enum SeekerCommands {
    /// Create a seeker account
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        skill: Option<String>,
        /// Years of experience
        #[arg(long)]
        experience: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Full-time, Part-time or Contract
        #[arg(long)]
        time_period: Option<String>,
        /// Hourly rate
        #[arg(long)]
        base_price: Option<String>,
    },
    /// Log in as a seeker
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Show a seeker profile; without an ID, your own
    Profile {
        id: Option<String>,
    },
}

pub async fn handle_seeker_command(ctx: &AppContext, cmd: SeekerCommands) -> anyhow::Result<()> {
    match cmd {
        SeekerCommands::Register {
            name,
            email,
            password,
            phone,
            skill,
            experience,
            location,
            time_period,
            base_price,
        } => {
            println!("{}", "Create a seeker account".blue().bold());
            let form = AuthFormFields {
                name: Some(text_or_prompt(name, "Name:")?),
                phone_number: Some(text_or_prompt(phone, "Phone number:")?),
                skill: optional_or_prompt(skill, "Skill:")?,
                experience: optional_or_prompt(experience, "Years of experience:")?
                    .as_deref()
                    .map(FormNumber::from),
                location: optional_or_prompt(location, "Location:")?,
                time_period: optional_or_prompt(time_period, "Availability (Full-time, Part-time, Contract):")?,
                base_price: optional_or_prompt(base_price, "Hourly rate:")?
                    .as_deref()
                    .map(FormNumber::from),
                ..AuthFormFields::new(
                    text_or_prompt(email, "Email:")?,
                    new_password_or_prompt(password)?,
                )
            };

            ctx.api.seeker().register(&form).await?;
            println!("{}", "Run 'freelink seeker login' to sign in".dimmed());
            Ok(())
        }
        SeekerCommands::Login { email, password } => {
            if already_logged_in(ctx, UserType::Seeker) {
                return Ok(());
            }
            let email = text_or_prompt(email, "Email:")?;
            let password = password_or_prompt(password)?;

            let user = ctx.session.seeker_login(&email, &password).await?;
            println!("Welcome, {}", user.name.bold());
            Ok(())
        }
        SeekerCommands::Profile { id } => match id {
            Some(id) => show_profile(ctx, SeekerId::from(id.as_str())).await,
            None => show_own_profile(ctx),
        },
    }
}

async fn show_profile(ctx: &AppContext, id: SeekerId) -> anyhow::Result<()> {
    let seeker = ctx.api.seeker().get_profile(&id).await?;

    println!("{}", format!("Seeker profile #{}", seeker.id).blue().bold());
    for line in rows_to_lines(&seeker_rows(&seeker)) {
        println!("  {}", line);
    }
    Ok(())
}

fn show_own_profile(ctx: &AppContext) -> anyhow::Result<()> {
    if !ctx.session.check_authentication() {
        return Err(AlreadyReported("not logged in".to_string()).into());
    }
    let Some(user) = ctx.session.user() else {
        return Err(AlreadyReported("not logged in".to_string()).into());
    };

    println!("{}", "Your profile".blue().bold());
    for line in rows_to_lines(&user_rows(&user)) {
        println!("  {}", line);
    }
    Ok(())
}
