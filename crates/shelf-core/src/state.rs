//! Playback state owned by the coordinator.

use serde::{Deserialize, Serialize};

/// Where playback currently stands. `Idle` means no track is loaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Paused,
    Playing,
}

/// Mutable playback state. `rev` is a monotonically increasing counter
/// bumped on every change; observers can compare revisions to detect
/// missed updates.
///
/// Invariant: `track_index`, when present, is a valid index into the
/// active playlist. Switching folders clears it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackState {
    pub rev: u64,
    pub folder: Option<String>,
    pub track_index: Option<usize>,
    pub status: PlaybackStatus,
    /// 0..=100; 0 is rendered as muted.
    pub volume_percent: u8,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            rev: 1,
            folder: None,
            track_index: None,
            status: PlaybackStatus::Idle,
            volume_percent: 100,
        }
    }
}

impl PlaybackState {
    /// Record a folder switch. Any previous track index is invalidated.
    pub fn set_folder(&mut self, folder: Option<String>) {
        self.folder = folder;
        self.track_index = None;
        self.status = PlaybackStatus::Idle;
        self.rev += 1;
    }

    pub fn set_track(&mut self, index: usize, status: PlaybackStatus) {
        self.track_index = Some(index);
        self.status = status;
        self.rev += 1;
    }

    pub fn set_status(&mut self, status: PlaybackStatus) {
        self.status = status;
        self.rev += 1;
    }

    pub fn set_volume(&mut self, percent: u8) {
        self.volume_percent = percent.min(100);
        self.rev += 1;
    }

    /// Linear transport level for the current volume.
    pub fn volume_level(&self) -> f32 {
        f32::from(self.volume_percent) / 100.0
    }

    /// Muted is exactly volume zero, distinct from every other level.
    pub fn is_muted(&self) -> bool {
        self.volume_percent == 0
    }
}
