//! API error types
use freelink_core::NormalizeError;
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Generic message used when a failed response carries no `error` field
pub const GENERIC_FAILURE: &str = "API request failed";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server could not be reached or the body never arrived
    #[error("Failed to fetch: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Check if the backend was unreachable
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Check if the backend answered with an error status
    pub fn is_http(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }

    /// HTTP status for `Http` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // Only failures to reach the server or receive its body count as transport
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            Self::Transport(err.to_string())
        } else {
            Self::InvalidResponse(err.to_string())
        }
    }
}

impl From<NormalizeError> for ApiError {
    fn from(err: NormalizeError) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}
