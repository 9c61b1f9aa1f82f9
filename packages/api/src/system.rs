// ABOUTME: Administrative database endpoints
// ABOUTME: Error statuses are reported as an unsuccessful SystemStatus instead of an Err

use freelink_core::Notifier;
use reqwest::Method;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::client::ApiContext;
use crate::error::ApiResult;
use crate::messages;
use crate::models::SystemStatus;

#[derive(Clone)]
pub struct SystemApi {
    ctx: ApiContext,
}

impl SystemApi {
    pub(crate) fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// `GET /init-db`
    pub async fn init_database(&self) -> ApiResult<SystemStatus> {
        self.call("init-db", messages::DB_INIT_SUCCESS, messages::DB_INIT_FAILED)
            .await
    }

    /// `GET /test-db-connection`
    pub async fn test_db_connection(&self) -> ApiResult<SystemStatus> {
        self.call(
            "test-db-connection",
            messages::DB_CONNECTION_SUCCESS,
            messages::DB_CONNECTION_FAILED,
        )
        .await
    }

    async fn call(&self, path: &str, success: &str, failure: &str) -> ApiResult<SystemStatus> {
        if self.ctx.uses_fallback() {
            warn!("Skipping {} while using demo data", path);
            self.ctx.notifier.warning(messages::DEMO_SYSTEM);
            return Ok(SystemStatus::failed(messages::DEMO_SYSTEM, None, Value::Null));
        }

        let response = self
            .ctx
            .http
            .send(Method::GET, path, &[], None)
            .await
            .map_err(|e| self.ctx.report(e, failure))?;

        if response.is_success() {
            let message = response
                .body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(success)
                .to_string();
            info!("{}: {}", path, message);
            self.ctx.notifier.success(&message);
            return Ok(SystemStatus::succeeded(message, response.body));
        }

        let reason = response.error_message().unwrap_or_else(|| failure.to_string());
        let details = response
            .body
            .get("details")
            .and_then(Value::as_str)
            .map(str::to_string);
        error!("{} returned {}: {}", path, response.status, reason);

        let notice = match &details {
            Some(details) => format!("{}: {}", reason, details),
            None => reason.clone(),
        };
        self.ctx.notifier.error(&notice);

        Ok(SystemStatus::failed(reason, details, response.body))
    }
}
