//! Album catalog types.

use serde::{Deserialize, Serialize};

/// Serde view of an album folder's `info.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumInfo {
    pub title: String,
    pub description: String,
}

/// One entry in the displayed catalog: a folder plus its lazily fetched
/// metadata. Albums whose metadata could not be fetched are dropped from
/// the catalog rather than aborting the load for their siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Folder name under the albums root.
    pub folder: String,
    pub title: String,
    pub description: String,
    /// Server path of the cover image. Referenced, never fetched here.
    pub cover_path: String,
}
