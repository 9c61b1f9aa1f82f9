// ABOUTME: Core types, traits, and utilities for Freelink
// ABOUTME: Foundational package providing domain types, normalization and notifications

pub mod constants;
pub mod normalize;
pub mod notify;
pub mod types;

// Re-export main types
pub use types::{AuthFormFields, FormNumber, SearchCriteria, Seeker, SeekerId, User, UserType};

// Re-export constants
pub use constants::{
    freelink_dir, session_file, AUTH_TOKEN_KEY, DEFAULT_API_BASE_URL, SESSION_FILE, USER_KEY,
};

// Re-export normalization
pub use normalize::{
    seeker_from_value, user_from_value, NormalizeError, NormalizeResult, ProviderRegistration,
    SeekerRegistration,
};

// Re-export notifications
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier, TracingNotifier};
