//! Song domain type
use super::duration::parse_duration;
use super::ids::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Cover art used whenever a song arrives without one
pub const DEFAULT_ALBUM_PHOTO_URL: &str =
    "https://cdn.pixabay.com/photo/2020/09/07/13/32/music-5551865_1280.jpg";

/// A song in the catalog
///
/// Wire shape: `{_id, title, artist, album, year, duration, src, albumPhoto}`.
/// Songs are immutable once loaded; edits go through the API and the
/// catalog is refetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier
    #[serde(rename = "_id")]
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Release year, kept as the display string the store holds
    #[serde(default)]
    pub year: String,

    /// Display duration (`m:ss` or decimal minutes)
    #[serde(default)]
    pub duration: String,

    /// Audio locator on the media host
    #[serde(default)]
    pub src: String,

    /// Cover art locator; empty until normalized
    #[serde(default, deserialize_with = "null_as_empty")]
    pub album_photo: String,

    /// When the store created the song
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Song {
    /// Create a song without media locators
    pub fn new(
        id: SongId,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        year: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            year: year.into(),
            duration: duration.into(),
            src: String::new(),
            album_photo: String::new(),
            created_at: None,
        }
    }

    /// Set the audio locator
    #[must_use]
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = src.into();
        self
    }

    /// Set the cover art locator
    #[must_use]
    pub fn with_album_photo(mut self, url: impl Into<String>) -> Self {
        self.album_photo = url.into();
        self
    }

    /// Replace missing cover art with the placeholder, in place
    pub fn normalize(&mut self) {
        if self.album_photo.trim().is_empty() {
            self.album_photo = DEFAULT_ALBUM_PHOTO_URL.to_string();
        }
    }

    /// Replace missing cover art with the placeholder
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Duration in seconds, if the display string can be parsed
    pub fn duration_seconds(&self) -> Option<f64> {
        parse_duration(&self.duration)
    }

    /// One-line description used by list views
    pub fn subtitle(&self) -> String {
        format!("{} • {} • {}", self.artist, self.album, self.year)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalize every song in a list
pub fn normalize_songs(songs: Vec<Song>) -> Vec<Song> {
    songs.into_iter().map(Song::normalized).collect()
}
