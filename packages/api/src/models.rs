use freelink_core::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful login: the bearer token and the shaped user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Acknowledgement returned by registration endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Read the `message` field of any body, falling back to `default`
    pub fn from_value(value: &Value, default: &str) -> Self {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(default);
        Self::new(message)
    }
}

/// Outcome of an administrative database call.
///
/// HTTP-level failures are reported here with `success: false` rather than
/// as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatus {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Raw response body
    pub data: Value,
}

impl SystemStatus {
    pub fn succeeded(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
            details: None,
            data,
        }
    }

    pub fn failed(error: impl Into<String>, details: Option<String>, data: Value) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            details,
            data,
        }
    }
}
