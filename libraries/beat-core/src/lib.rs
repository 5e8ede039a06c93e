//! Beat District Core
//!
//! Platform-agnostic domain types, validation and error handling shared by
//! every Beat District crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`, `User` and their identifiers
//! - **Forms**: client-side validation that runs before any network call
//! - **Collaborator Traits**: `CatalogSource`, `PlaylistStore`
//! - **Error Handling**: the `BeatError` taxonomy (validation, not found, network)
//!
//! # Example
//!
//! ```rust
//! use beat_core::types::{Playlist, Song, SongId, DEFAULT_ALBUM_PHOTO_URL};
//!
//! let song = Song::new(SongId::new("s1"), "Intro", "Artist", "Album", "2024", "3:20")
//!     .with_src("https://media.example.com/intro.mp3");
//!
//! // Missing cover art is replaced by the placeholder on ingestion
//! let song = song.normalized();
//! assert_eq!(song.album_photo, DEFAULT_ALBUM_PHOTO_URL);
//! assert_eq!(song.duration_seconds(), Some(200.0));
//!
//! let playlist = Playlist::new("Morning", vec![song]);
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod forms;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{BeatError, Result};
pub use forms::{LoginForm, RegisterForm, SongForm, SongFormMode};
pub use traits::{CatalogSource, PlaylistStore};
pub use types::{
    format_clock, normalize_songs, parse_duration, Playlist, PlaylistRequest, Song, SongId, User,
    UserId, ALL_SONGS_PLAYLIST, DEFAULT_ALBUM_PHOTO_URL,
};
