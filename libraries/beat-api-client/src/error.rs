//! Error types for the Beat District API client.

use beat_core::BeatError;
use thiserror::Error;

/// Errors that can occur when talking to the Beat District API.
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server answered `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Authentication required but no token available, or the token was refused
    #[error("Authentication required")]
    AuthRequired,

    /// Form fields rejected before sending
    #[error("{0}")]
    Validation(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// File not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File exceeds the server's upload limit
    #[error("File too large: {path} is {size} bytes (limit {limit})")]
    FileTooLarge { path: String, size: u64, limit: u64 },

    /// IO error while reading an upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl From<BeatError> for ApiClientError {
    fn from(err: BeatError) -> Self {
        match err {
            BeatError::Validation(msg) => Self::Validation(msg),
            other => Self::ParseError(other.to_string()),
        }
    }
}

impl From<ApiClientError> for BeatError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::Validation(msg) => BeatError::Validation(msg),
            // The server's own wording is what users get to see
            ApiClientError::Rejected(msg) | ApiClientError::ServerError { message: msg, .. }
                if !msg.is_empty() =>
            {
                BeatError::Network(msg)
            }
            other => BeatError::Network(other.to_string()),
        }
    }
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiClientError>;
