//! Types for Beat District API requests and responses.

use beat_core::{Song, UserId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ApiClientError, Result};

/// Upload limit enforced by the server per file.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Configuration for connecting to a Beat District server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the server (e.g., "https://beats.example.com")
    pub url: String,
    /// Bearer token (if logged in)
    pub access_token: Option<String>,
    /// Id of the logged-in user, sent in playlist bodies
    pub user_id: Option<UserId>,
    /// Total request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl ApiConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
            user_id: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Create a config with a stored session.
    pub fn with_session(
        url: impl Into<String>,
        access_token: impl Into<String>,
        user_id: Option<UserId>,
    ) -> Self {
        Self {
            access_token: Some(access_token.into()),
            user_id,
            ..Self::new(url)
        }
    }

    /// Override the timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

// =============================================================================
// Response Envelope
// =============================================================================

/// Wrapper around every API response.
///
/// `data` is kept as raw JSON because failed calls put arbitrary error
/// objects there.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl Envelope {
    /// Decode the payload of a successful response.
    pub fn into_data<T: DeserializeOwned>(self, what: &str) -> Result<T> {
        let data = self
            .data
            .ok_or_else(|| ApiClientError::ParseError(format!("Missing {what} in response")))?;

        serde_json::from_value(data)
            .map_err(|e| ApiClientError::ParseError(format!("Failed to parse {what}: {e}")))
    }
}

// =============================================================================
// Playlist Types
// =============================================================================

/// Body for add-playlist and update-playlist.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistBody<'a> {
    pub name: &'a str,
    pub songs: &'a [Song],
    pub user_id: &'a UserId,
}

/// Body for delete-playlist.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePlaylistBody<'a> {
    pub name: &'a str,
    pub user_id: &'a UserId,
}
