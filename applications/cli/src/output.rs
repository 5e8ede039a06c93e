//! Audio output for terminal sessions
//!
//! The CLI has no audio device; it records what a media element would be
//! told to do and reports it through `tracing`.
use beat_playback::{AudioOutput, LoadGeneration};
use tracing::debug;

/// Output that only logs commands
#[derive(Debug)]
pub struct TracingOutput {
    loaded: Option<(String, LoadGeneration)>,
    playing: bool,
    gain: f32,
}

impl TracingOutput {
    pub fn new() -> Self {
        Self {
            loaded: None,
            playing: false,
            gain: 1.0,
        }
    }

    /// Source and generation of the last load
    pub fn loaded(&self) -> Option<&(String, LoadGeneration)> {
        self.loaded.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }
}

impl Default for TracingOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for TracingOutput {
    fn stop(&mut self) {
        self.playing = false;
        self.loaded = None;
        debug!("output: stop");
    }

    fn load(&mut self, src: &str, generation: LoadGeneration) {
        debug!(src, generation = generation.value(), "output: load");
        self.loaded = Some((src.to_string(), generation));
    }

    fn play(&mut self) {
        self.playing = true;
        debug!("output: play");
    }

    fn pause(&mut self) {
        self.playing = false;
        debug!("output: pause");
    }

    fn seek(&mut self, seconds: f64) {
        debug!(seconds, "output: seek");
    }

    fn set_volume(&mut self, gain: f32) {
        self.gain = gain;
        debug!(gain, "output: volume");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_the_last_load() {
        let mut output = TracingOutput::new();
        let generation = LoadGeneration::INITIAL.next();

        output.load("https://media.example.com/a.mp3", generation);
        output.play();
        assert!(output.is_playing());
        assert_eq!(
            output.loaded(),
            Some(&("https://media.example.com/a.mp3".to_string(), generation))
        );

        output.stop();
        assert!(!output.is_playing());
        assert!(output.loaded().is_none());
    }
}
