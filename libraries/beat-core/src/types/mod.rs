//! Domain types shared across Beat District crates

mod duration;
mod ids;
mod playlist;
mod song;
mod user;

pub use duration::{format_clock, parse_duration};
pub use ids::{SongId, UserId};
pub use playlist::{Playlist, PlaylistRequest, ALL_SONGS_PLAYLIST};
pub use song::{normalize_songs, Song, DEFAULT_ALBUM_PHOTO_URL};
pub use user::User;
