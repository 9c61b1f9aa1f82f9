// ABOUTME: Error types for session management
// ABOUTME: Wraps API, storage and serialization failures raised during login and logout

use freelink_api::ApiError;
use freelink_storage::StorageError;
use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SessionError {
    /// Check if the login server could not be reached
    pub fn is_transport(&self) -> bool {
        matches!(self, SessionError::Api(e) if e.is_transport())
    }
}
