//! Playback Events
//!
//! Event-based communication for UI synchronization during playback.
//! Events are queued by the engine and drained by the view layer.

use crate::types::LoadGeneration;
use beat_core::SongId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Transport toggled between playing and paused
    StateChanged {
        /// Whether playback is now active
        is_playing: bool,
    },

    /// Current song changed and a new load was issued
    SongChanged {
        /// ID of the new current song, `None` when cleared
        song_id: Option<SongId>,
        /// ID of the previous song (if any)
        previous_song_id: Option<SongId>,
        /// Generation of the load request for the new song
        generation: LoadGeneration,
    },

    /// Playback position moved by a seek
    PositionChanged {
        /// New position in seconds
        position_secs: f64,
        /// Song duration in seconds, if known
        duration_secs: Option<f64>,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// Whether shuffle is now on
        enabled: bool,
    },

    /// Queue contents replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },
}
