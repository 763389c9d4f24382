//! API Error Types
//!
//! Failures talking to the portal backend: transport, HTTP status and
//! payload decoding.

use thiserror::Error;

/// Errors returned by [`PortalApi`](super::PortalApi) calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection or IO failure before a response arrived
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Configured request timeout elapsed
    #[error("Request timeout")]
    Timeout,

    /// Backend answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failure, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
