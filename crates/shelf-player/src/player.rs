//! Playback coordinator.
//!
//! Owns the active [`Playlist`] and [`PlaybackState`] and routes the whole
//! command set, so UI bindings stay thin adapters. Folder loads carry a
//! generation token: every `begin_load` invalidates the tokens of loads
//! started earlier, and a listing that comes back under a stale token is
//! discarded. That keeps last-selection-wins even if a caller drives
//! concurrent fetches from shared state.

use tracing::{debug, info, warn};

use shelf_core::command::{Command, StepOutcome};
use shelf_core::config::Config;
use shelf_core::format::format_timeline;
use shelf_core::playlist::{Playlist, Track};
use shelf_core::state::{PlaybackState, PlaybackStatus};

use crate::error::PlayerError;
use crate::listing::DirectoryLister;
use crate::transport::AudioTransport;

/// Token identifying one folder-load request. Only the most recently
/// issued token is accepted by [`Player::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

pub struct Player<T: AudioTransport> {
    lister: DirectoryLister,
    transport: T,
    state: PlaybackState,
    playlist: Playlist,
    load_gen: u64,
    /// Volume to restore when unmuting. Never zero.
    last_nonzero_volume: u8,
}

impl<T: AudioTransport> Player<T> {
    pub fn new(client: reqwest::Client, config: &Config, transport: T) -> Self {
        let lister = DirectoryLister::new(
            client,
            config.server.base_url.clone(),
            config.library.audio_ext.clone(),
        );
        let mut player = Self {
            lister,
            transport,
            state: PlaybackState::default(),
            playlist: Playlist::default(),
            load_gen: 0,
            last_nonzero_volume: if config.playback.default_volume > 0 {
                config.playback.default_volume
            } else {
                10
            },
        };
        player.set_volume(config.playback.default_volume);
        player
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.state
            .track_index
            .and_then(|i| self.playlist.get(i))
    }

    /// Route one command. Every user gesture reduces to exactly one call
    /// here.
    pub async fn handle(&mut self, command: Command) -> Result<(), PlayerError> {
        match command {
            Command::Play { index } => self.select_track(index, true),
            Command::TogglePause => self.toggle_play_pause(),
            Command::Next => self.next().map(|_| ()),
            Command::Previous => self.previous().map(|_| ()),
            Command::Seek { fraction } => {
                self.seek(fraction);
                Ok(())
            }
            Command::SetVolume { percent } => {
                self.set_volume(percent);
                Ok(())
            }
            Command::ToggleMute => {
                self.toggle_mute();
                Ok(())
            }
            Command::LoadFolder { folder } => self.load_folder(&folder).await.map(|_| ()),
        }
    }

    // ── folder loading ───────────────────────────────────────────────────

    /// Replace the active playlist with `folder`'s tracks.
    ///
    /// On failure the previous playlist is discarded too — the caller must
    /// see an empty state, never a stale or partial list.
    pub async fn load_folder(&mut self, folder: &str) -> Result<&Playlist, PlayerError> {
        let token = self.begin_load();
        match self.lister.fetch_tracks(folder).await {
            Ok(tracks) => {
                self.finish_load(token, folder, tracks);
                Ok(&self.playlist)
            }
            Err(e) => {
                if self.is_current(token) {
                    self.playlist = Playlist::default();
                    self.transport.pause();
                    self.state.set_folder(None);
                }
                Err(e)
            }
        }
    }

    /// Start a folder load; invalidates every earlier token.
    pub fn begin_load(&mut self) -> LoadToken {
        self.load_gen += 1;
        LoadToken(self.load_gen)
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        token.0 == self.load_gen
    }

    /// Install a fetched listing. Returns false (and changes nothing) when
    /// a newer load has started since `token` was issued.
    pub fn finish_load(&mut self, token: LoadToken, folder: &str, tracks: Vec<Track>) -> bool {
        if !self.is_current(token) {
            debug!("discarding stale listing for folder {}", folder);
            return false;
        }
        self.transport.pause();
        self.playlist = Playlist::new(folder, tracks);
        self.state.set_folder(Some(folder.to_string()));
        info!(
            "loaded folder {} ({} tracks)",
            folder,
            self.playlist.len()
        );
        true
    }

    // ── transport commands ───────────────────────────────────────────────

    /// Select a track by index. Without autoplay the track is left paused
    /// at position zero; with autoplay a host refusal surfaces as
    /// [`PlayerError::PlaybackBlocked`] with the track still selected.
    pub fn select_track(&mut self, index: usize, autoplay: bool) -> Result<(), PlayerError> {
        let Some(track) = self.playlist.get(index) else {
            return Err(PlayerError::IndexOutOfRange {
                index,
                len: self.playlist.len(),
            });
        };
        let url = self.lister.track_url(&self.playlist.folder, &track.file_name);
        debug!("selecting track {}: {}", index, url);

        self.transport.set_source(&url);
        self.state.set_track(index, PlaybackStatus::Paused);
        if autoplay {
            match self.transport.play() {
                Ok(()) => self.state.set_status(PlaybackStatus::Playing),
                Err(e) => {
                    warn!("playback refused for track {}: {}", index, e);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Playing pauses in place (position retained); Paused resumes from
    /// the retained position. No-op when nothing is loaded.
    pub fn toggle_play_pause(&mut self) -> Result<(), PlayerError> {
        match self.state.status {
            PlaybackStatus::Idle => Ok(()),
            PlaybackStatus::Playing => {
                self.transport.pause();
                self.state.set_status(PlaybackStatus::Paused);
                Ok(())
            }
            PlaybackStatus::Paused => {
                self.transport.play()?;
                self.state.set_status(PlaybackStatus::Playing);
                Ok(())
            }
        }
    }

    /// Step to the following track. At the end of the playlist nothing
    /// changes — no wrap — and the boundary is reported in the outcome.
    pub fn next(&mut self) -> Result<StepOutcome, PlayerError> {
        let Some(current) = self.state.track_index else {
            return Ok(StepOutcome::AtBoundary);
        };
        if current + 1 >= self.playlist.len() {
            debug!("already at the last track");
            return Ok(StepOutcome::AtBoundary);
        }
        self.select_track(current + 1, true)?;
        Ok(StepOutcome::Moved(current + 1))
    }

    /// Step to the preceding track; same boundary behaviour as [`next`].
    ///
    /// [`next`]: Player::next
    pub fn previous(&mut self) -> Result<StepOutcome, PlayerError> {
        let Some(current) = self.state.track_index else {
            return Ok(StepOutcome::AtBoundary);
        };
        if current == 0 {
            debug!("already at the first track");
            return Ok(StepOutcome::AtBoundary);
        }
        self.select_track(current - 1, true)?;
        Ok(StepOutcome::Moved(current - 1))
    }

    /// Seek to a fraction of the track duration. No-op while the duration
    /// is unknown; never produces a NaN or negative position.
    pub fn seek(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            return;
        }
        let Some(duration) = self
            .transport
            .duration()
            .filter(|d| d.is_finite() && *d > 0.0)
        else {
            debug!("seek ignored: duration unknown");
            return;
        };
        self.transport.set_position(fraction.clamp(0.0, 1.0) * duration);
    }

    pub fn set_volume(&mut self, percent: u8) {
        let percent = percent.min(100);
        if percent > 0 {
            self.last_nonzero_volume = percent;
        }
        self.state.set_volume(percent);
        self.transport.set_volume(self.state.volume_level());
        debug!("volume {}/100 (muted: {})", percent, self.state.is_muted());
    }

    /// Mute remembers the volume it replaced and unmute restores it.
    pub fn toggle_mute(&mut self) {
        if self.state.is_muted() {
            self.set_volume(self.last_nonzero_volume);
        } else {
            self.set_volume(0);
        }
    }

    // ── readouts ─────────────────────────────────────────────────────────

    /// Current `(position, duration)` straight from the transport. Nothing
    /// here is stored long-term.
    pub fn timeline(&self) -> (f64, Option<f64>) {
        (self.transport.position(), self.transport.duration())
    }

    /// The "MM:SS / MM:SS" songtime readout.
    pub fn timeline_display(&self) -> String {
        let (position, duration) = self.timeline();
        format_timeline(position, duration)
    }
}
