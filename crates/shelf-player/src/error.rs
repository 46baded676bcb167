//! Error taxonomy for listing, catalog, and playback operations.
//!
//! Nothing here is fatal: listing and catalog failures degrade to an empty
//! result at the operation boundary, and boundary next/previous steps are
//! reported as no-op outcomes rather than errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// Network failure or non-success HTTP status.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Payload arrived but could not be understood (malformed `info.json`).
    /// Listing parse failures fold into the zero-matches outcome instead.
    #[error("parse failed for {url}: {reason}")]
    Parse { url: String, reason: String },

    /// The host refused to start playback without prior user interaction.
    #[error("playback blocked by the host; interact with the page to enable playback")]
    PlaybackBlocked,

    /// Track selection outside the active playlist.
    #[error("track index {index} out of range for playlist of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl PlayerError {
    pub fn fetch(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Parse {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
