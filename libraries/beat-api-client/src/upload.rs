//! Song upload operations for catalog administrators.

use crate::error::{ApiClientError, Result};
use crate::response::{read_envelope, send_error};
use crate::types::MAX_UPLOAD_BYTES;
use beat_core::{Song, SongForm, SongFormMode};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info};

/// Admin client for adding and editing catalog songs.
pub struct UploadClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: &'a str,
}

impl<'a> UploadClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: &'a str) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Add a new song with its audio file and cover image.
    ///
    /// Returns the whole catalog after the insert.
    pub async fn add_song(&self, form: &SongForm) -> Result<Vec<Song>> {
        let url = format!("{}/api/admin/add-song", self.base_url);
        self.send_song(&url, form).await
    }

    /// Edit an existing song. Files are optional and replace the stored ones.
    ///
    /// Returns the whole catalog after the update.
    pub async fn edit_song(&self, form: &SongForm) -> Result<Vec<Song>> {
        let url = format!("{}/api/admin/edit-song", self.base_url);
        self.send_song(&url, form).await
    }

    async fn send_song(&self, url: &str, form: &SongForm) -> Result<Vec<Song>> {
        let mut multipart = Form::new()
            .text("title", form.title.clone())
            .text("artist", form.artist.clone())
            .text("album", form.album.clone())
            .text("year", form.year.clone())
            .text("duration", form.duration.clone());

        if let Some(id) = &form.id {
            multipart = multipart.text("_id", id.as_str().to_string());
        }
        if let Some(path) = &form.file {
            multipart = multipart.part("file", file_part(path).await?);
        }
        if let Some(path) = &form.album_photo {
            multipart = multipart.part("albumPhoto", file_part(path).await?);
        }

        debug!(url = %url, title = %form.title, "Uploading song");

        let response = self
            .http
            .post(url)
            .bearer_auth(self.access_token)
            .multipart(multipart)
            .send()
            .await
            .map_err(send_error)?;

        let songs: Vec<Song> = read_envelope(response).await?.into_data("songs")?;

        let action = match form.mode() {
            SongFormMode::Create => "added",
            SongFormMode::Update => "edited",
        };
        info!(
            title = %form.title,
            action,
            catalog_size = songs.len(),
            "Song uploaded"
        );

        Ok(songs)
    }
}

/// Read a file into a multipart part, enforcing the upload limit.
async fn file_part(path: &Path) -> Result<Part> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|_| ApiClientError::FileNotFound(path.display().to_string()))?;

    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(ApiClientError::FileTooLarge {
            path: path.display().to_string(),
            size: metadata.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let contents = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    Ok(Part::bytes(contents)
        .file_name(file_name)
        .mime_str(mime_type_for_file(path))?)
}

/// Get MIME type for an audio or image file.
pub(crate) fn mime_type_for_file(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("opus") => "audio/opus",
        Some("wav") => "audio/wav",
        Some("m4a" | "aac") => "audio/mp4",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
