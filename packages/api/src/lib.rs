// ABOUTME: Client for the Freelink marketplace REST API
// ABOUTME: HTTP utility, provider/seeker/system modules and the fallback data policy

pub mod client;
pub mod error;
pub mod fallback;
pub mod http;
pub mod messages;
pub mod models;
pub mod provider;
pub mod seeker;
pub mod system;

pub use client::MarketplaceApi;
pub use error::{ApiError, ApiResult};
pub use http::{HttpClient, HttpResponse};
pub use models::{LoginResponse, MessageResponse, SystemStatus};
pub use provider::ProviderApi;
pub use seeker::SeekerApi;
pub use system::SystemApi;

// Re-export config types
pub use freelink_config::DataSource;
