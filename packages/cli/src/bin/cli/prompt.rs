// ABOUTME: Interactive fallbacks for credentials and form fields not given as flags
// ABOUTME: Passwords are always read masked

use anyhow::Context;
use inquire::{Password, PasswordDisplayMode, Text};

/// Use `value` when given, otherwise ask for it
pub fn text_or_prompt(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Text::new(label)
            .prompt()
            .with_context(|| format!("{} input cancelled", label.trim_end_matches(':'))),
    }
}

/// Optional form field; an empty answer leaves it unset
pub fn optional_or_prompt(value: Option<String>, label: &str) -> anyhow::Result<Option<String>> {
    if value.is_some() {
        return Ok(value);
    }
    let answer = Text::new(label)
        .with_help_message("Press enter to skip")
        .prompt()
        .with_context(|| format!("{} input cancelled", label.trim_end_matches(':')))?;
    Ok(Some(answer).filter(|a| !a.trim().is_empty()))
}

pub fn password_or_prompt(value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Password input cancelled"),
    }
}

/// Password with confirmation, for registration
pub fn new_password_or_prompt(value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_custom_confirmation_message("Confirm password:")
            .with_custom_confirmation_error_message("Passwords do not match")
            .prompt()
            .context("Password input cancelled"),
    }
}
