use freelink_api::ApiError;
use freelink_auth::SessionError;
use thiserror::Error;

/// A failure the user has already been told about through a notification
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AlreadyReported(pub String);

/// Whether printing `err` again would only repeat a notification
pub fn was_reported(err: &anyhow::Error) -> bool {
    err.is::<AlreadyReported>() || err.is::<ApiError>() || err.is::<SessionError>()
}
