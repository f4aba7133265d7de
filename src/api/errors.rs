use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the records API client.
///
/// Every variant is treated the same by the presentation layer: log the
/// details, show one generic message, display an empty result set. Nothing
/// is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Record not found")]
    NotFound,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }

        match err.status() {
            Some(StatusCode::NOT_FOUND) => ApiError::NotFound,
            Some(status) => ApiError::Status(status.as_u16()),
            None if err.is_timeout() || err.is_connect() || err.is_request() => {
                ApiError::Request(err.to_string())
            }
            None => ApiError::Unexpected(err.to_string()),
        }
    }
}
