//! Playlist persistence.

use crate::error::Result;
use crate::response::{read_envelope, send_error};
use crate::types::{DeletePlaylistBody, PlaylistBody};
use beat_core::{PlaylistRequest, User, UserId};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

/// Playlist client. Every call returns the updated user record.
pub struct PlaylistClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: &'a str,
    user_id: &'a UserId,
}

impl<'a> PlaylistClient<'a> {
    pub(crate) fn new(
        http: &'a Client,
        base_url: &'a str,
        access_token: &'a str,
        user_id: &'a UserId,
    ) -> Self {
        Self {
            http,
            base_url,
            access_token,
            user_id,
        }
    }

    /// Create a playlist.
    pub async fn add_playlist(&self, request: &PlaylistRequest) -> Result<User> {
        let user = self.post("add-playlist", &self.body(request)).await?;
        info!(playlist = %request.name, songs = request.songs.len(), "Playlist created");
        Ok(user)
    }

    /// Replace the songs of the playlist with the same name.
    pub async fn update_playlist(&self, request: &PlaylistRequest) -> Result<User> {
        let user = self.post("update-playlist", &self.body(request)).await?;
        info!(playlist = %request.name, songs = request.songs.len(), "Playlist updated");
        Ok(user)
    }

    /// Delete a playlist by name.
    pub async fn delete_playlist(&self, name: &str) -> Result<User> {
        let body = DeletePlaylistBody {
            name,
            user_id: self.user_id,
        };
        let user = self.post("delete-playlist", &body).await?;
        info!(playlist = %name, "Playlist deleted");
        Ok(user)
    }

    fn body<'r>(&'r self, request: &'r PlaylistRequest) -> PlaylistBody<'r> {
        PlaylistBody {
            name: &request.name,
            songs: &request.songs,
            user_id: self.user_id,
        }
    }

    async fn post<B: Serialize + Sync>(&self, endpoint: &str, body: &B) -> Result<User> {
        let url = format!("{}/api/songs/{}", self.base_url, endpoint);
        debug!(url = %url, "Sending playlist request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.access_token)
            .json(body)
            .send()
            .await
            .map_err(send_error)?;

        read_envelope(response).await?.into_data("user")
    }
}
