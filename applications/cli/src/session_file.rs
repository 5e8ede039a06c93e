//! Login persistence between CLI invocations
use crate::error::{ClientError, Result};
use beat_core::UserId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Bearer token and user id stored on disk after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl StoredSession {
    pub fn new(token: impl Into<String>, user_id: Option<UserId>) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }

    /// Read the stored session, `None` if there is no file
    pub async fn load(path: &Path) -> Result<Option<Self>> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let session = serde_json::from_str(&contents).map_err(|e| {
            ClientError::Session(format!("{} is not a valid session: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "Session loaded");
        Ok(Some(session))
    }

    /// Write the session, creating parent directories as needed
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;
        debug!(path = %path.display(), "Session saved");
        Ok(())
    }

    /// Delete the stored session; a missing file is not an error
    pub async fn remove(path: &Path) -> Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
