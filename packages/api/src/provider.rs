// ABOUTME: Provider endpoints: registration, login and seeker search
// ABOUTME: Search degrades to fallback records when the backend cannot be reached

use freelink_core::{
    seeker_from_value, AuthFormFields, Notifier, ProviderRegistration, SearchCriteria, Seeker,
    UserType,
};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::client::ApiContext;
use crate::error::{ApiError, ApiResult};
use crate::fallback;
use crate::messages;
use crate::models::{LoginResponse, MessageResponse};

#[derive(Clone)]
pub struct ProviderApi {
    ctx: ApiContext,
}

impl ProviderApi {
    pub(crate) fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// `POST /provider/register`
    pub async fn register(&self, form: &AuthFormFields) -> ApiResult<MessageResponse> {
        info!("Registering provider with email: {}", form.email);
        let body = serde_json::to_value(ProviderRegistration::from(form))?;
        self.ctx.register("provider/register", body).await
    }

    /// `POST /provider/login`
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        self.ctx
            .login(UserType::Provider, "provider/login", email, password)
            .await
    }

    /// `GET /seekers` with the non-empty filters as query parameters.
    ///
    /// An unreachable backend yields the backup dataset; an error status is
    /// notified and returned.
    pub async fn search_seekers(&self, criteria: &SearchCriteria) -> ApiResult<Vec<Seeker>> {
        info!("Searching seekers with criteria: {:?}", criteria);

        if self.ctx.uses_fallback() {
            warn!("Serving demo search results");
            self.ctx.notifier.warning(messages::DEMO_DATA);
            return Ok(fallback::demo_seekers(criteria));
        }

        let query = criteria.query_pairs();
        match self
            .ctx
            .http
            .get_json("seekers", &query)
            .await
            .and_then(|value| shape_seekers(&value))
        {
            Ok(seekers) => {
                info!("Found {} seekers", seekers.len());
                Ok(seekers)
            }
            Err(e) if e.is_transport() => {
                warn!("Search could not reach the backend, using fallback data: {}", e);
                self.ctx.notifier.warning(messages::CONNECTION_FAILED);
                Ok(fallback::backup_seekers(criteria))
            }
            Err(e) => {
                error!("{}: {}", messages::SEARCH_FAILED, e);
                self.ctx
                    .notifier
                    .error(&format!("{}: {}", messages::SEARCH_FAILED, e));
                Err(e)
            }
        }
    }
}

fn shape_seekers(value: &Value) -> ApiResult<Vec<Seeker>> {
    let items = value
        .as_array()
        .ok_or_else(|| ApiError::invalid_response("expected a list of seekers"))?;
    items
        .iter()
        .map(|item| seeker_from_value(item).map_err(ApiError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_seekers_mixed_field_names() {
        let seekers = shape_seekers(&json!([
            {"id": 1, "name": "A", "timePeriod": "Contract", "basePrice": 10},
            {"id": 2, "name": "B", "time_period": "Part-time", "base_price": "20.5"}
        ]))
        .unwrap();

        assert_eq!(seekers[0].time_period, "Contract");
        assert_eq!(seekers[1].time_period, "Part-time");
        assert_eq!(seekers[1].base_price, 20.5);
    }

    #[test]
    fn test_shape_seekers_rejects_non_array() {
        assert!(matches!(
            shape_seekers(&json!({"error": "nope"})),
            Err(ApiError::InvalidResponse(_))
        ));
    }
}
