//! Playlist domain types
use super::ids::SongId;
use super::song::{normalize_songs, Song};
use serde::{Deserialize, Serialize};

/// Name of the synthetic playlist wrapping the whole catalog
pub const ALL_SONGS_PLAYLIST: &str = "All Songs";

/// A named, ordered list of songs owned by a user
///
/// Songs are stored by value: each entry is a full copy of the song at the
/// time the playlist was saved. Later edits to the catalog do not reach
/// existing playlists until they are saved again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Store-assigned id, absent for synthetic playlists
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Playlist name, unique per user
    pub name: String,

    /// Ordered song copies
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl Playlist {
    /// Create a playlist without a store id
    pub fn new(name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            id: None,
            name: name.into(),
            songs,
        }
    }

    /// The synthetic "All Songs" playlist over the given catalog
    pub fn all_songs(songs: Vec<Song>) -> Self {
        Self::new(ALL_SONGS_PLAYLIST, songs)
    }

    /// Whether this is the synthetic catalog playlist
    pub fn is_all_songs(&self) -> bool {
        self.id.is_none() && self.name == ALL_SONGS_PLAYLIST
    }

    /// Replace missing cover art on every contained song
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.songs = normalize_songs(self.songs);
        self
    }

    /// Position of a song in this playlist
    pub fn position_of(&self, id: &SongId) -> Option<usize> {
        self.songs.iter().position(|song| &song.id == id)
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// Payload for creating or replacing a playlist
///
/// Carries the full denormalized songs, not just ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistRequest {
    /// Playlist name
    pub name: String,

    /// Songs in playlist order
    pub songs: Vec<Song>,
}

impl PlaylistRequest {
    /// Create a request
    pub fn new(name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            name: name.into(),
            songs,
        }
    }
}
