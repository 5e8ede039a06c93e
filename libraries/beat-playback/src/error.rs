//! Error types for playback management

use beat_core::{BeatError, SongId};
use thiserror::Error;

/// Playback errors
///
/// Transport operations never fail; only lookups into the queue can.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Song is not part of the current queue
    #[error("Song not in queue: {0}")]
    SongNotFound(SongId),
}

impl From<PlaybackError> for BeatError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::SongNotFound(id) => BeatError::not_found("song", id.as_str()),
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
