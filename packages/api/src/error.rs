//! Error types for the API access layer.

use thiserror::Error;

/// Message shown when the server gives no usable explanation.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Failure below HTTP: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid request URL: {0}")]
    Url(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Why an API call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    /// HTTP 401. The session has been rejected by the server.
    #[error("unauthorized: {}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Unauthorized { message: Option<String> },
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for the user-facing notification: the server's own message when it
    /// sent one, otherwise [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE)
            }
            ApiError::Network(_) | ApiError::Decode(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::Network(e.to_string())
    }
}
