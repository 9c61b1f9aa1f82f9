// ABOUTME: User-facing notification seam used by the API modules and the session manager
// ABOUTME: Front ends plug in their own Notifier; tracing and recording implementations ship here

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        };
        f.write_str(label)
    }
}

/// A transient message for the user, the equivalent of a toast banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}

/// Receives user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    fn info(&self, message: &str) {
        self.notify(Notification::info(message));
    }

    fn warning(&self, message: &str) {
        self.notify(Notification::warning(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Routes notifications into the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => {
                info!(kind = %notification.level, "{}", notification.message)
            }
            NotificationLevel::Warning => warn!("{}", notification.message),
            NotificationLevel::Error => error!("{}", notification.message),
        }
    }
}

/// Keeps every notification in memory; used by tests and by front ends that render later
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Notifications of one level, in emission order
    pub fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.level == level)
            .map(|n| n.message)
            .collect()
    }

    /// True if any notification of `level` contains `fragment`
    pub fn contains(&self, level: NotificationLevel, fragment: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(fragment))
    }

    pub fn clear(&self) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order_and_levels() {
        let notifier = RecordingNotifier::new();
        notifier.success("Successfully logged in!");
        notifier.error("Login failed: Invalid credentials");
        notifier.warning("Using mock login");

        assert_eq!(notifier.notifications().len(), 3);
        assert_eq!(
            notifier.messages(NotificationLevel::Error),
            vec!["Login failed: Invalid credentials".to_string()]
        );
        assert!(notifier.contains(NotificationLevel::Warning, "mock"));
        assert!(!notifier.contains(NotificationLevel::Info, "mock"));

        notifier.clear();
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_clones_share_the_same_log() {
        let notifier = RecordingNotifier::new();
        let shared: Arc<dyn Notifier> = Arc::new(notifier.clone());

        shared.info("hello");

        assert_eq!(notifier.messages(NotificationLevel::Info), vec!["hello".to_string()]);
    }
}
