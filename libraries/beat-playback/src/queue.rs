//! Playback queue
//!
//! The ordered song list currently eligible for playback plus the position
//! of the current song. Navigation is index-based and never reorders songs.

use beat_core::{Song, SongId};

/// Index-based playback queue
///
/// Invariant: `index` is `Some(i)` with `i < songs.len()`, or `None`.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    /// Songs in playback order
    songs: Vec<Song>,

    /// Position of the current song
    index: Option<usize>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all songs
    ///
    /// The current position is cleared; callers re-point it.
    pub fn replace(&mut self, songs: Vec<Song>) {
        self.songs = songs;
        self.index = None;
    }

    /// Position of a song, matched by id
    pub fn position_of(&self, id: &SongId) -> Option<usize> {
        self.songs.iter().position(|song| &song.id == id)
    }

    /// Move the current position
    ///
    /// Out-of-range indices are ignored and return `false`.
    pub fn set_index(&mut self, index: usize) -> bool {
        if index < self.songs.len() {
            self.index = Some(index);
            true
        } else {
            false
        }
    }

    /// Clear the current position
    pub fn clear_index(&mut self) {
        self.index = None;
    }

    /// Current position
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Song at the current position
    pub fn current(&self) -> Option<&Song> {
        self.index.and_then(|i| self.songs.get(i))
    }

    /// Song at index
    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// All songs in order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
