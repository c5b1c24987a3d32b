// File: core/error.rs
// Error types shared by the HTTP core and every provider built on it.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub const TIMEOUT_MESSAGE: &str = "Request timeout. Please try again.";
pub const GENERIC_MESSAGE: &str = "Something went wrong";

// --- 1. Normalized failure (ApiError) ---
// Produced for timeouts and non-2xx responses only.

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    /// HTTP status code. `None` for timeouts.
    pub status: Option<u16>,
    /// The full decoded response body, JSON or plain text.
    pub details: Option<Value>,
}

impl ApiError {
    pub fn timeout() -> Self {
        Self {
            message: TIMEOUT_MESSAGE.to_string(),
            status: None,
            details: None,
        }
    }

    /// Builds the error for a response outside the 2xx range.
    ///
    /// The message comes from a string `message` field of a JSON object body,
    /// falling back to [`GENERIC_MESSAGE`].
    pub fn from_response(status: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_MESSAGE.to_string());

        Self {
            message,
            status: Some(status),
            details: Some(body),
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.status.is_none() && self.message == TIMEOUT_MESSAGE
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

// --- 2. Layer result error (CoreError) ---
// Every public operation returns Result<_, CoreError>.

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    Api(#[from] ApiError),

    // Transport failures stay raw, they are never folded into ApiError.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Failed to encode payload or decode response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            CoreError::Api(e) => Some(e),
            _ => None,
        }
    }
}
