//! Platform-agnostic audio output trait
//!
//! Abstracts the media element that actually produces sound. The engine
//! owns all transport state and only tells the output what to do.

use crate::types::LoadGeneration;

/// Platform-agnostic audio output
///
/// Commands are fire-and-forget. When a load completes, the platform reports
/// back through [`PlaybackEngine::finish_load`](crate::PlaybackEngine::finish_load)
/// with the generation it was given, so stale completions can be dropped.
pub trait AudioOutput: Send {
    /// Stop whatever is playing and release the current source
    fn stop(&mut self);

    /// Load a new source
    ///
    /// # Arguments
    /// * `src` - Playable URL of the audio file
    /// * `generation` - Token to pass back on completion
    fn load(&mut self, src: &str, generation: LoadGeneration);

    /// Start or resume output of the loaded source
    fn play(&mut self);

    /// Pause output
    fn pause(&mut self);

    /// Move the playhead
    fn seek(&mut self, seconds: f64);

    /// Apply a linear gain (0.0-1.0)
    fn set_volume(&mut self, gain: f32);
}
