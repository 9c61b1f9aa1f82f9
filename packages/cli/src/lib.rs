// ABOUTME: Library side of the freelink command-line front end
// ABOUTME: Console notifications, output rendering and the wiring of config, API and session

pub mod context;
pub mod error;
pub mod notifier;
pub mod render;

pub use context::AppContext;
pub use error::AlreadyReported;
pub use notifier::ConsoleNotifier;
