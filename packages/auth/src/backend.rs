// ABOUTME: Login seam between the session manager and the REST API
// ABOUTME: Lets the session manager be driven by a mock backend in tests

use async_trait::async_trait;
use freelink_api::{ApiResult, LoginResponse, MarketplaceApi};
use freelink_core::UserType;

#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Authenticate against the login endpoint for `role`
    async fn login(&self, role: UserType, email: &str, password: &str) -> ApiResult<LoginResponse>;
}

#[async_trait]
impl AuthBackend for MarketplaceApi {
    async fn login(&self, role: UserType, email: &str, password: &str) -> ApiResult<LoginResponse> {
        match role {
            UserType::Provider => self.provider().login(email, password).await,
            UserType::Seeker => self.seeker().login(email, password).await,
        }
    }
}
