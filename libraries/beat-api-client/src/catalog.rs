//! Catalog listing.

use crate::error::Result;
use crate::response::{read_envelope, send_error};
use beat_core::Song;
use reqwest::Client;
use tracing::debug;

/// Read-only catalog client. Needs no token.
pub struct CatalogClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> CatalogClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch every song, newest first.
    pub async fn get_all_songs(&self) -> Result<Vec<Song>> {
        let url = format!("{}/api/admin/get-all-songs", self.base_url);
        debug!(url = %url, "Fetching catalog");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let songs: Vec<Song> = read_envelope(response).await?.into_data("songs")?;

        debug!(count = songs.len(), "Catalog fetched");
        Ok(songs)
    }
}
