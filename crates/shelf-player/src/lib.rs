//! Playback engine for the shelf player.
//!
//! Fetches album and track listings from a static file server and drives
//! playback through the [`transport::AudioTransport`] seam. All fetches
//! are sequential; there is never more than one outstanding request.

pub mod catalog;
pub mod error;
pub mod listing;
pub mod player;
pub mod transport;

pub use error::PlayerError;
pub use player::Player;
