//! Beat District - Playback Engine
//!
//! Platform-agnostic playback management for Beat District.
//!
//! This crate provides:
//! - An index-based queue derived from a playlist or the catalog
//! - Transport control (play, pause, seek, next, previous)
//! - Shuffle that picks random indices without reordering the queue
//! - Volume control (linear 0.0-1.0, mute/unmute)
//! - Load generations so superseded audio loads are ignored
//!
//! # Architecture
//!
//! `beat-playback` never touches audio itself. Platform code implements
//! [`AudioOutput`] and attaches it with [`PlaybackEngine::set_output`];
//! the engine works fine without one, which is how it is tested.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use beat_core::{Song, SongId};
//! use beat_playback::{PlaybackConfig, PlaybackEngine};
//!
//! let mut engine = PlaybackEngine::new(PlaybackConfig::default());
//!
//! let songs = vec![
//!     Song::new(SongId::new("a"), "First", "Artist", "Album", "2023", "3:20"),
//!     Song::new(SongId::new("b"), "Second", "Artist", "Album", "2023", "3:00"),
//! ];
//!
//! // The first song becomes current without autoplay
//! engine.load_queue(songs);
//! assert_eq!(engine.current_song().unwrap().id.as_str(), "a");
//! assert!(!engine.is_playing());
//!
//! engine.play();
//! engine.next();
//! assert_eq!(engine.current_song().unwrap().id.as_str(), "b");
//! assert!(engine.is_playing());
//!
//! // Seeks are clamped to the song duration
//! engine.seek(500.0);
//! assert_eq!(engine.current_time(), 180.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
pub mod error;
pub mod events;
pub mod output;
pub mod queue;
pub mod shuffle;
pub mod types;
pub mod volume;

pub use engine::PlaybackEngine;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use output::AudioOutput;
pub use types::{LoadGeneration, PlaybackConfig, PlaybackSnapshot};
