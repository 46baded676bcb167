//! The explicit command set routed through the playback coordinator.
//!
//! UI bindings translate raw input events into these and carry no business
//! logic of their own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd")]
pub enum Command {
    /// Select a track by playlist index and start playing it.
    Play { index: usize },
    TogglePause,
    Next,
    Previous,
    /// Seek to a fraction (0..=1) of the current track's duration.
    Seek { fraction: f64 },
    /// Volume as a 0..=100 percentage; 0 means muted.
    SetVolume { percent: u8 },
    ToggleMute,
    /// Replace the active playlist with the given folder's tracks.
    LoadFolder { folder: String },
}

/// Outcome of a next/previous step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to the given playlist index.
    Moved(usize),
    /// Already at the first or last track; index and playback unchanged.
    AtBoundary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_round_trips_through_json() {
        let cmd = Command::Seek { fraction: 0.25 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"cmd\":\"Seek\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
