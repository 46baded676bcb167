//! Directory lister — turns a static server's HTML index into a track list.
//!
//! The backing store only speaks "directory index as hyperlinks", so the
//! HTML scraping is isolated here; everything downstream sees structured
//! [`Track`] sequences.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use shelf_core::playlist::Track;

use crate::error::PlayerError;

/// Extract playable entries from a directory-index document, in document
/// order. An entry is playable when its href ends with `audio_ext`; its
/// identity is the portion of the href after the `/{folder}/` prefix. Bare
/// relative links are taken whole; pathed hrefs that lack the folder
/// prefix belong to some other folder and are skipped.
pub fn parse_track_listing(html: &str, folder: &str, audio_ext: &str) -> Vec<Track> {
    let document = Html::parse_document(html);
    let mut tracks = Vec::new();
    let Ok(selector) = Selector::parse("a[href]") else {
        return tracks;
    };

    let prefix = format!("/{}/", folder.trim_matches('/'));
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !href.ends_with(audio_ext) {
            continue;
        }
        let file_name = match href.find(&prefix) {
            Some(pos) => &href[pos + prefix.len()..],
            // A bare relative link belongs to the listed folder; a pathed
            // href without the folder prefix points somewhere else.
            None if !href.contains('/') => href,
            None => continue,
        };
        if file_name.is_empty() {
            continue;
        }
        tracks.push(Track::new(file_name));
    }
    tracks
}

/// Fetches per-folder track listings from the static file server.
pub struct DirectoryLister {
    client: reqwest::Client,
    base_url: String,
    audio_ext: String,
}

impl DirectoryLister {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        audio_ext: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            audio_ext: audio_ext.into(),
        }
    }

    /// Fetch and parse one folder's listing with a single request.
    ///
    /// A listing with zero audio entries is a distinct, non-error outcome
    /// (`Ok` with an empty vec) that callers render as "no tracks" rather
    /// than as a fetch failure.
    pub async fn fetch_tracks(&self, folder: &str) -> Result<Vec<Track>, PlayerError> {
        let url = format!("{}/{}/", self.base_url, folder.trim_matches('/'));
        debug!("fetching track listing: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PlayerError::fetch(&url, e))?;
        if !response.status().is_success() {
            return Err(PlayerError::fetch(
                &url,
                format!("status {}", response.status()),
            ));
        }
        let html = response
            .text()
            .await
            .map_err(|e| PlayerError::fetch(&url, e))?;

        let tracks = parse_track_listing(&html, folder, &self.audio_ext);
        if tracks.is_empty() {
            warn!("no {} entries found in folder {}", self.audio_ext, folder);
        }
        Ok(tracks)
    }

    /// Absolute URL of one track inside a folder.
    pub fn track_url(&self, folder: &str, file_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            folder.trim_matches('/'),
            file_name
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
