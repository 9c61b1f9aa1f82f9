pub mod prompt;
pub mod provider;
pub mod seeker;
pub mod session;
pub mod system;
