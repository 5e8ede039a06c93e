//! Signed-in user state

use beat_core::{BeatError, Playlist, Result, User};
use tracing::info;

/// The signed-in user and their bearer token
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    /// Create a signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the bearer token obtained from login
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Replace the user record
    ///
    /// Cover art inside every playlist is normalized.
    pub fn set_user(&mut self, user: User) {
        info!(user_id = %user.id, playlists = user.playlists.len(), "User loaded");
        self.user = Some(user.normalized());
    }

    /// Forget user and token
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    /// Signed-in user, if loaded
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Bearer token, if logged in
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is held
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the loaded user may manage the catalog
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }

    /// Find one of the user's playlists by name
    ///
    /// # Errors
    /// Returns `NotFound` when no user is loaded or the name is unknown.
    pub fn playlist(&self, name: &str) -> Result<&Playlist> {
        self.user
            .as_ref()
            .and_then(|user| user.playlist(name))
            .ok_or_else(|| BeatError::not_found("playlist", name))
    }

    /// The user's playlists, empty when signed out
    pub fn playlists(&self) -> &[Playlist] {
        self.user.as_ref().map_or(&[], |user| user.playlists.as_slice())
    }
}
