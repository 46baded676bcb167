//! Track and playlist types.

use serde::{Deserialize, Serialize};

use crate::format::display_title;

/// One playable audio file, identified by its filename within the owning
/// folder. Filenames are not globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub file_name: String,
}

impl Track {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Human-readable title, always recomputed from the filename so it can
    /// never diverge from it.
    pub fn display_title(&self) -> String {
        display_title(&self.file_name)
    }
}

/// The ordered track list associated with exactly one folder. Selecting a
/// new folder replaces the playlist wholesale; there is no merging. Order
/// is whatever the directory listing returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub folder: String,
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(folder: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            folder: folder.into(),
            tracks,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Index of a track by filename, if present.
    pub fn position_of(&self, file_name: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.file_name == file_name)
    }
}
