// ABOUTME: Prints notifications to the terminal in place of toast banners
// ABOUTME: Errors and warnings go to stderr, everything else to stdout

use colored::*;
use freelink_core::{Notification, NotificationLevel, Notifier};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

/// One terminal line for a notification
pub fn format_notification(notification: &Notification) -> String {
    let marker = match notification.level {
        NotificationLevel::Success => "✓".green().bold(),
        NotificationLevel::Info => "ℹ".cyan(),
        NotificationLevel::Warning => "⚠".yellow().bold(),
        NotificationLevel::Error => "✗".red().bold(),
    };
    format!("{} {}", marker, notification.message)
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        debug!(kind = %notification.level, "notification: {}", notification.message);
        let line = format_notification(&notification);
        match notification.level {
            NotificationLevel::Warning | NotificationLevel::Error => eprintln!("{}", line),
            NotificationLevel::Success | NotificationLevel::Info => println!("{}", line),
        }
    }
}
