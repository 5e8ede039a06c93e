//! Playback engine
//!
//! Owns the queue and the transport state and drives an optional
//! [`AudioOutput`]. All mutation is run-to-completion on `&mut self`.

use crate::error::{PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::output::AudioOutput;
use crate::queue::Queue;
use crate::shuffle::{advance_index, Direction};
use crate::types::{LoadGeneration, PlaybackConfig, PlaybackSnapshot};
use crate::volume::Volume;
use beat_core::{normalize_songs, Song};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

/// Main playback engine
///
/// Coordinates queue navigation, transport state, volume and the audio
/// output. Platform code attaches an [`AudioOutput`] and mirrors the audio
/// clock back through [`tick`](Self::tick).
pub struct PlaybackEngine {
    // Queue and current position
    queue: Queue,

    // Denormalized copy of the song at the current position
    current_song: Option<Song>,

    // Transport
    is_playing: bool,
    current_time: f64,
    shuffle: bool,
    volume: Volume,

    // Load supersession
    generation: LoadGeneration,

    // Platform audio
    output: Option<Box<dyn AudioOutput>>,

    // Randomness for shuffle and boundary jumps
    rng: Box<dyn RngCore + Send>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackEngine {
    /// Create new playback engine
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a playback engine with a specific random source
    ///
    /// Seeded generators make shuffle reproducible.
    pub fn with_rng<R>(config: PlaybackConfig, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            queue: Queue::new(),
            current_song: None,
            is_playing: false,
            current_time: 0.0,
            shuffle: config.shuffle,
            volume: Volume::new(config.volume),
            generation: LoadGeneration::INITIAL,
            output: None,
            rng: Box::new(rng),
            pending_events: Vec::new(),
        }
    }

    /// Attach the platform audio output
    ///
    /// The output immediately receives the current volume and, if a song is
    /// current, a load request for it.
    pub fn set_output(&mut self, mut output: Box<dyn AudioOutput>) {
        output.set_volume(self.volume.gain());
        if let Some(song) = &self.current_song {
            output.load(&song.src, self.generation);
            if self.is_playing {
                output.play();
            }
        }
        self.output = Some(output);
    }

    /// Detach the platform audio output
    pub fn take_output(&mut self) -> Option<Box<dyn AudioOutput>> {
        self.output.take()
    }

    // ===== Queue Management =====

    /// Replace the queue
    ///
    /// - No current song: the first song becomes current without starting
    ///   playback.
    /// - Current song still present: the position follows it, nothing reloads
    ///   and the elapsed time is clamped to the refreshed duration.
    /// - Current song gone: switches to the first song.
    /// - Empty queue: clears the current song and stops output.
    pub fn load_queue(&mut self, songs: Vec<Song>) {
        self.queue.replace(normalize_songs(songs));
        self.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });

        if self.queue.is_empty() {
            self.clear_current();
            return;
        }

        let retained = self
            .current_song
            .as_ref()
            .and_then(|song| self.queue.position_of(&song.id));

        match retained {
            Some(index) => {
                self.queue.set_index(index);
                self.current_song = self.queue.current().cloned();
                // The refreshed copy may carry a shorter duration
                self.current_time = self.clamp_time(self.current_time);
                debug!(index, "Queue reloaded around current song");
            }
            None => self.change_song(0),
        }
    }

    /// Make a queued song current
    ///
    /// Restarts from 0 and keeps playing if playback was active.
    ///
    /// # Errors
    /// Returns `SongNotFound` when no song in the queue has the same id;
    /// state is left untouched.
    pub fn select_song(&mut self, song: &Song) -> Result<()> {
        let index = self
            .queue
            .position_of(&song.id)
            .ok_or_else(|| PlaybackError::SongNotFound(song.id.clone()))?;

        self.change_song(index);
        Ok(())
    }

    /// Songs in the queue
    pub fn queue(&self) -> &[Song] {
        self.queue.songs()
    }

    /// Number of songs in the queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // ===== Playback Control =====

    /// Start or resume playback
    ///
    /// No-op without a current song or when already playing.
    pub fn play(&mut self) {
        if self.current_song.is_none() || self.is_playing {
            return;
        }

        self.is_playing = true;
        if let Some(output) = self.output.as_mut() {
            output.play();
        }
        self.emit(PlaybackEvent::StateChanged { is_playing: true });
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if !self.is_playing {
            return;
        }

        self.is_playing = false;
        if let Some(output) = self.output.as_mut() {
            output.pause();
        }
        self.emit(PlaybackEvent::StateChanged { is_playing: false });
    }

    /// Toggle between play and pause
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Skip to next song
    ///
    /// Sequential unless shuffle is on. Past the last song a random song is
    /// picked. No-op on an empty queue.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.advance(Direction::Forward);
    }

    /// Skip to previous song
    ///
    /// Mirror image of [`next`](Self::next).
    pub fn previous(&mut self) {
        self.advance(Direction::Backward);
    }

    fn advance(&mut self, direction: Direction) {
        let Some(index) = advance_index(
            self.queue.index(),
            self.queue.len(),
            direction,
            self.shuffle,
            &mut self.rng,
        ) else {
            return;
        };

        self.change_song(index);
    }

    // ===== Seek =====

    /// Seek within the current song
    ///
    /// Clamped to `[0, duration]`; only the lower bound applies when the
    /// duration is unknown. No-op without a current song.
    pub fn seek(&mut self, seconds: f64) {
        if self.current_song.is_none() {
            return;
        }

        let position = self.clamp_time(seconds);
        self.current_time = position;
        if let Some(output) = self.output.as_mut() {
            output.seek(position);
        }
        self.emit(PlaybackEvent::PositionChanged {
            position_secs: position,
            duration_secs: self.duration(),
        });
    }

    /// Mirror the audio clock
    ///
    /// Called by the platform as the output advances. Emits no event.
    pub fn tick(&mut self, elapsed: f64) {
        if self.current_song.is_none() {
            return;
        }
        self.current_time = self.clamp_time(elapsed);
    }

    fn clamp_time(&self, seconds: f64) -> f64 {
        let lower = if seconds.is_nan() { 0.0 } else { seconds.max(0.0) };
        match self.duration() {
            Some(duration) => lower.min(duration),
            None => lower,
        }
    }

    // ===== Volume =====

    /// Set volume (0.0-1.0)
    ///
    /// Out-of-range values are clamped. Unmutes.
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.volume.unmute();
        self.apply_volume();
    }

    /// Get current volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.volume.mute();
        self.apply_volume();
    }

    /// Unmute audio
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.apply_volume();
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_volume();
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    fn apply_volume(&mut self) {
        if let Some(output) = self.output.as_mut() {
            output.set_volume(self.volume.gain());
        }
        self.emit(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    // ===== Shuffle =====

    /// Turn shuffle on or off
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.shuffle == enabled {
            return;
        }
        self.shuffle = enabled;
        self.emit(PlaybackEvent::ShuffleChanged { enabled });
    }

    /// Flip the shuffle toggle
    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.shuffle);
    }

    /// Whether shuffle is on
    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    // ===== Load Generations =====

    /// Generation of the most recent load request
    pub fn generation(&self) -> LoadGeneration {
        self.generation
    }

    /// Report a completed load from the audio output
    ///
    /// Returns `true` if the load is still the current one. Completions of
    /// superseded loads return `false` and must be discarded.
    pub fn finish_load(&mut self, generation: LoadGeneration) -> bool {
        let current = generation == self.generation;
        if !current {
            debug!(
                stale = generation.value(),
                current = self.generation.value(),
                "Ignoring superseded load"
            );
        }
        current
    }

    // ===== State Queries =====

    /// Song currently loaded
    pub fn current_song(&self) -> Option<&Song> {
        self.current_song.as_ref()
    }

    /// Position of the current song in the queue
    pub fn current_index(&self) -> Option<usize> {
        self.queue.index()
    }

    /// Whether playback is active
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Elapsed seconds into the current song
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Duration of the current song in seconds, if parseable
    pub fn duration(&self) -> Option<f64> {
        self.current_song.as_ref().and_then(Song::duration_seconds)
    }

    /// Copy of the full playback state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            queue_len: self.queue.len(),
            current_index: self.queue.index(),
            current_song: self.current_song.clone(),
            is_playing: self.is_playing,
            current_time: self.current_time,
            duration: self.duration(),
            shuffle_on: self.shuffle,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            generation: self.generation,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    // ===== Song Changes =====

    /// Switch to the song at `index` and issue a new load
    fn change_song(&mut self, index: usize) {
        if !self.queue.set_index(index) {
            return;
        }
        let Some(song) = self.queue.get(index).cloned() else {
            return;
        };

        let previous_song_id = self.current_song.as_ref().map(|s| s.id.clone());
        self.generation = self.generation.next();
        self.current_time = 0.0;

        if let Some(output) = self.output.as_mut() {
            output.stop();
            output.load(&song.src, self.generation);
            if self.is_playing {
                output.play();
            }
        }

        info!(
            song_id = %song.id,
            index,
            generation = self.generation.value(),
            "Song changed"
        );

        self.emit(PlaybackEvent::SongChanged {
            song_id: Some(song.id.clone()),
            previous_song_id,
            generation: self.generation,
        });
        self.current_song = Some(song);
    }

    /// Drop the current song after the queue emptied
    fn clear_current(&mut self) {
        self.queue.clear_index();
        let Some(previous) = self.current_song.take() else {
            return;
        };

        self.current_time = 0.0;
        self.generation = self.generation.next();
        if let Some(output) = self.output.as_mut() {
            output.stop();
        }

        if self.is_playing {
            self.is_playing = false;
            self.emit(PlaybackEvent::StateChanged { is_playing: false });
        }
        self.emit(PlaybackEvent::SongChanged {
            song_id: None,
            previous_song_id: Some(previous.id),
            generation: self.generation,
        });
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
