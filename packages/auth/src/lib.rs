// ABOUTME: Freelink session library tracking who is logged in
// ABOUTME: Restores the session from durable storage and drives provider/seeker login and logout

pub mod backend;
pub mod error;
pub mod session;

// Re-export main types
pub use backend::AuthBackend;
pub use error::{SessionError, SessionResult};
pub use session::{SessionManager, SessionSnapshot, SessionStatus};
