//! CLI error types
use beat_api_client::ApiClientError;
use beat_core::BeatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session file error: {0}")]
    Session(String),

    #[error("Not logged in (run `beat login` first)")]
    NotLoggedIn,

    #[error("{0}")]
    Core(#[from] BeatError),

    #[error("API error: {0}")]
    Api(#[from] ApiClientError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}
