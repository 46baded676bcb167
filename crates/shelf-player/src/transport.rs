//! The audio transport seam.
//!
//! The coordinator only consumes this contract: a settable source, play
//! and pause, a readable/settable position, a duration that may not be
//! known yet, and a linear volume level. The concrete media stack (an
//! HTML audio element, mpv, rodio) lives behind it and is out of scope.

use crate::error::PlayerError;

pub trait AudioTransport {
    /// Point the transport at a new resource and reset position to zero.
    fn set_source(&mut self, url: &str);

    /// Begin or resume playback. A host with an autoplay policy may refuse
    /// until the user has interacted; that surfaces as
    /// [`PlayerError::PlaybackBlocked`].
    fn play(&mut self) -> Result<(), PlayerError>;

    fn pause(&mut self);

    /// Current position in seconds.
    fn position(&self) -> f64;

    fn set_position(&mut self, seconds: f64);

    /// Duration of the current resource in seconds, once known.
    fn duration(&self) -> Option<f64>;

    /// Linear volume, 0.0..=1.0.
    fn set_volume(&mut self, level: f32);
}

/// Transport that accepts every command and produces no sound. Stands in
/// until a real media stack is wired up, and keeps the coordinator honest
/// about only talking through the trait.
#[derive(Debug)]
pub struct SilentTransport {
    source: Option<String>,
    playing: bool,
    position: f64,
    duration: Option<f64>,
    volume: f32,
}

impl Default for SilentTransport {
    fn default() -> Self {
        Self {
            source: None,
            playing: false,
            position: 0.0,
            duration: None,
            volume: 1.0,
        }
    }
}

impl SilentTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl AudioTransport for SilentTransport {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.position = 0.0;
        self.duration = None;
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, seconds: f64) {
        self.position = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
    }
}
