//! Error types for the registry client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the registry
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: the request never produced a response
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The registry answered with a non-success status code
    #[error("registry error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body from the registry
        message: String,
    },

    /// The response body was not a valid record payload
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}
