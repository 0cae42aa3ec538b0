//! Application error types
//!
//! Failures raised outside the use cases: startup wiring and the HTTP
//! middleware stack.

use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Middleware rejections
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Request timed out")]
    RequestTimeout,

    // Storage errors
    #[error("Database error: {0}")]
    Database(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 429 Too Many Requests
            Self::RateLimitExceeded => 429,

            // 503 Service Unavailable
            Self::RequestTimeout => 503,

            // 500 Internal Server Error
            Self::Database(_) | Self::Config(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::RequestTimeout => "REQUEST_TIMEOUT",
            Self::Database(_) => "STORE_UNAVAILABLE",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Error envelope returned to API callers
///
/// `error` carries the message verbatim; `code` is a stable machine-readable tag.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
