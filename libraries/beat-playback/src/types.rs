//! Core types for playback management

use beat_core::Song;
use serde::{Deserialize, Serialize};

/// Monotonic counter identifying one audio load request
///
/// Every song change issues a new generation. A load that completes with an
/// older generation has been superseded and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct LoadGeneration(u64);

impl LoadGeneration {
    /// The generation before any load was issued
    pub const INITIAL: Self = Self(0);

    /// The following generation
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw counter value
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Configuration for the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume gain (0.0-1.0, default: 1.0)
    pub volume: f32,

    /// Initial shuffle toggle (default: off)
    pub shuffle: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            shuffle: false,
        }
    }
}

/// Read-only view of the playback state for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackSnapshot {
    /// Number of songs eligible for playback
    pub queue_len: usize,

    /// Position of the current song in the queue
    pub current_index: Option<usize>,

    /// Song currently loaded
    pub current_song: Option<Song>,

    /// Transport state
    pub is_playing: bool,

    /// Elapsed seconds into the current song
    pub current_time: f64,

    /// Duration of the current song in seconds, if known
    pub duration: Option<f64>,

    /// Whether next/previous pick at random
    pub shuffle_on: bool,

    /// Volume level (0.0-1.0), independent of mute
    pub volume: f32,

    /// Whether output is muted
    pub is_muted: bool,

    /// Generation of the most recent load request
    pub generation: LoadGeneration,
}
