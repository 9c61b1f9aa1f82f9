// ABOUTME: Seeker endpoints: registration, login and profile lookup
// ABOUTME: Registration bodies are normalised from raw form fields before sending

use freelink_core::{
    seeker_from_value, AuthFormFields, Notifier, Seeker, SeekerId, SeekerRegistration, UserType,
};
use tracing::{info, warn};

use crate::client::ApiContext;
use crate::error::{ApiError, ApiResult};
use crate::fallback;
use crate::messages;
use crate::models::{LoginResponse, MessageResponse};

#[derive(Clone)]
pub struct SeekerApi {
    ctx: ApiContext,
}

impl SeekerApi {
    pub(crate) fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// `POST /seeker/register`
    pub async fn register(&self, form: &AuthFormFields) -> ApiResult<MessageResponse> {
        info!("Registering seeker with email: {}", form.email);
        let body = serde_json::to_value(SeekerRegistration::from(form))?;
        self.ctx.register("seeker/register", body).await
    }

    /// `POST /seeker/login`
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        self.ctx
            .login(UserType::Seeker, "seeker/login", email, password)
            .await
    }

    /// `GET /seeker/{id}`
    pub async fn get_profile(&self, id: &SeekerId) -> ApiResult<Seeker> {
        info!("Fetching seeker profile {}", id);

        if self.ctx.uses_fallback() {
            warn!("Serving demo profile for seeker {}", id);
            self.ctx.notifier.warning(messages::DEMO_DATA);
            return Ok(fallback::demo_profile(id));
        }

        let path = format!("seeker/{}", urlencoding::encode(&id.to_string()));
        self.ctx
            .http
            .get_json(&path, &[])
            .await
            .and_then(|value| seeker_from_value(&value).map_err(ApiError::from))
            .map_err(|e| self.ctx.report(e, messages::PROFILE_FAILED))
    }
}
