// ABOUTME: MarketplaceApi bundles the provider, seeker and system modules over one HTTP client
// ABOUTME: Also holds the shared login/registration flow and failure reporting used by every module

use freelink_config::{ClientConfig, DataSource};
use freelink_core::{user_from_value, Notifier, UserType};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::fallback;
use crate::http::HttpClient;
use crate::messages;
use crate::models::{LoginResponse, MessageResponse};
use crate::provider::ProviderApi;
use crate::seeker::SeekerApi;
use crate::system::SystemApi;

/// State shared by the domain modules
#[derive(Clone)]
pub(crate) struct ApiContext {
    pub(crate) http: HttpClient,
    pub(crate) data_source: DataSource,
    pub(crate) notifier: Arc<dyn Notifier>,
}

impl ApiContext {
    pub(crate) fn uses_fallback(&self) -> bool {
        self.data_source == DataSource::Fallback
    }

    /// Log and notify a failed call, handing the error back for propagation
    pub(crate) fn report(&self, err: ApiError, context: &str) -> ApiError {
        if err.is_transport() {
            self.notifier.error(messages::CONNECTION_FAILED);
        }
        error!("{}: {}", context, err);
        self.notifier.error(&format!("{}: {}", context, err));
        err
    }

    pub(crate) async fn login(
        &self,
        role: UserType,
        path: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<LoginResponse> {
        info!("Logging in {} with email: {}", role, email);

        if email.trim().is_empty() || password.is_empty() {
            let err = ApiError::Validation(messages::CREDENTIALS_REQUIRED.to_string());
            return Err(self.report(err, messages::LOGIN_FAILED));
        }

        if self.uses_fallback() {
            warn!("Serving mock {} login for {}", role, email);
            self.notifier.warning(messages::MOCK_LOGIN);
            return Ok(fallback::mock_login(role, email));
        }

        let body = json!({ "email": email, "password": password });
        self.http
            .post_json(path, &body)
            .await
            .and_then(|value| parse_login(&value, role))
            .map_err(|e| self.report(e, messages::LOGIN_FAILED))
    }

    pub(crate) async fn register(&self, path: &str, body: Value) -> ApiResult<MessageResponse> {
        if self.uses_fallback() {
            warn!("Simulating registration at {}", path);
            self.notifier.warning(messages::DEMO_REGISTRATION);
            return Ok(MessageResponse::new(messages::REGISTRATION_SUCCESSFUL));
        }

        match self.http.post_json(path, &body).await {
            Ok(value) => {
                let response = MessageResponse::from_value(&value, messages::REGISTRATION_SUCCESSFUL);
                info!("Registration accepted at {}", path);
                self.notifier.success(&response.message);
                Ok(response)
            }
            Err(e) => Err(self.report(e, messages::REGISTRATION_FAILED)),
        }
    }
}

/// Shape a login body into a token and user; both must be present
fn parse_login(value: &Value, role: UserType) -> ApiResult<LoginResponse> {
    let token = value
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::invalid_response("missing token"))?;
    let user = value
        .get("user")
        .filter(|u| !u.is_null())
        .ok_or_else(|| ApiError::invalid_response("missing user"))?;

    Ok(LoginResponse {
        token: token.to_string(),
        user: user_from_value(user, role)?,
    })
}

/// Client for the Freelink REST API
#[derive(Clone)]
pub struct MarketplaceApi {
    provider: ProviderApi,
    seeker: SeekerApi,
    system: SystemApi,
    ctx: ApiContext,
}

impl MarketplaceApi {
    pub fn new(base_url: impl Into<String>, data_source: DataSource, notifier: Arc<dyn Notifier>) -> Self {
        let ctx = ApiContext {
            http: HttpClient::new(base_url),
            data_source,
            notifier,
        };

        Self {
            provider: ProviderApi::new(ctx.clone()),
            seeker: SeekerApi::new(ctx.clone()),
            system: SystemApi::new(ctx.clone()),
            ctx,
        }
    }

    pub fn from_config(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(config.api_base_url.clone(), config.data_source, notifier)
    }

    pub fn provider(&self) -> &ProviderApi {
        &self.provider
    }

    pub fn seeker(&self) -> &SeekerApi {
        &self.seeker
    }

    pub fn system(&self) -> &SystemApi {
        &self.system
    }

    pub fn data_source(&self) -> DataSource {
        self.ctx.data_source
    }

    pub fn base_url(&self) -> &str {
        self.ctx.http.base_url()
    }
}
