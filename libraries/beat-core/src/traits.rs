//! Collaborator traits for Beat District
//!
//! State crates depend on these seams instead of on the HTTP client, so the
//! catalog and playlist editor can be driven by any backend (or a mock).
use crate::error::Result;
use crate::types::{PlaylistRequest, Song, User};
use async_trait::async_trait;

/// Source of the full song catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every song in the catalog
    async fn fetch_songs(&self) -> Result<Vec<Song>>;
}

/// Persistence for user playlists
///
/// Every call returns the updated user record, which replaces the client's
/// copy wholesale.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Create a new playlist
    async fn create_playlist(&self, request: &PlaylistRequest) -> Result<User>;

    /// Replace the songs of an existing playlist, matched by name
    async fn update_playlist(&self, request: &PlaylistRequest) -> Result<User>;

    /// Delete a playlist by name
    async fn delete_playlist(&self, name: &str) -> Result<User>;
}
