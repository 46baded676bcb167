//! Shared types for the shelf player: tracks, playlists, albums, playback
//! state, the command set, display formatting, and configuration.
//!
//! Nothing in this crate touches the network; the lister, catalog loader,
//! and playback coordinator live in `shelf-player`.

pub mod album;
pub mod command;
pub mod config;
pub mod format;
pub mod playlist;
pub mod state;
