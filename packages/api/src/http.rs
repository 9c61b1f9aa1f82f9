// ABOUTME: Thin JSON-over-HTTP wrapper shared by the domain API modules
// ABOUTME: Parses success and error bodies alike and separates transport failures from HTTP errors

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{ApiError, ApiResult, GENERIC_FAILURE};

/// Status and parsed body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The `error` field of the body, if it carries one
    pub fn error_message(&self) -> Option<String> {
        error_field(&self.body)
    }

    /// Convert a non-success response into [`ApiError::Http`]
    pub fn into_result(self) -> ApiResult<Value> {
        if self.is_success() {
            return Ok(self.body);
        }
        let message = self
            .error_message()
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Err(ApiError::http(self.status.as_u16(), message))
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path relative to the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Perform a request and return its status and parsed body without
    /// judging the status
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> ApiResult<HttpResponse> {
        let url = self.url(path);
        debug!("Making API request to: {} {}", method, url);

        let mut request = self.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status from {}: {}", url, status);

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;
        let body = parse_body(content_type.as_deref(), &bytes)?;

        Ok(HttpResponse { status, body })
    }

    /// Perform a request and fail with [`ApiError::Http`] on a non-success status
    pub async fn fetch_json(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        self.send(method, path, query, body).await?.into_result()
    }

    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        self.fetch_json(Method::GET, path, query, None).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.fetch_json(Method::POST, path, &[], Some(body)).await
    }
}

fn error_field(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Decode a response body.
///
/// A JSON content type must parse. Anything else is tried as JSON and
/// otherwise wrapped as `{"error": text}` so callers see one shape.
fn parse_body(content_type: Option<&str>, bytes: &[u8]) -> ApiResult<Value> {
    let is_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);

    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim();

    if is_json {
        if trimmed.is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(trimmed)
            .map_err(|e| ApiError::invalid_response(e.to_string()));
    }

    if trimmed.is_empty() {
        return Ok(json!({ "error": "Unknown error" }));
    }

    Ok(serde_json::from_str(trimmed).unwrap_or_else(|_| json!({ "error": trimmed })))
}
