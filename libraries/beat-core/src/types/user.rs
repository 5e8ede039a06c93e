//! User domain type
use super::ids::UserId;
use super::playlist::Playlist;
use serde::{Deserialize, Serialize};

/// User account as returned by `get-user-data`
///
/// The password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    #[serde(rename = "_id")]
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Whether the user may add and edit catalog songs
    #[serde(default)]
    pub is_admin: bool,

    /// Playlists owned by the user
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl User {
    /// Replace missing cover art inside every playlist
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.playlists = self.playlists.into_iter().map(Playlist::normalized).collect();
        self
    }

    /// Find a playlist by name
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name == name)
    }
}
