//! Album catalog loader.
//!
//! Derives candidate album folders from the albums-root directory index,
//! then fetches each folder's `info.json` exactly once, sequentially. A
//! broken album is skipped with a warning; it never aborts the catalog.

use std::time::{SystemTime, UNIX_EPOCH};

use scraper::{Html, Selector};
use tracing::{debug, warn};

use shelf_core::album::{Album, AlbumInfo};

use crate::error::PlayerError;

/// Candidate album folder names from the albums-root index, in document
/// order. A href qualifies when it sits below `/{albums_root}/`, ends with
/// a path separator (so it is a directory, one level deeper than the
/// root), and its final segment contains no dot — which keeps index and
/// listing files out of the catalog.
pub fn parse_album_folders(html: &str, albums_root: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut folders = Vec::new();
    let Ok(selector) = Selector::parse("a[href]") else {
        return folders;
    };

    let needle = format!("/{}/", albums_root.trim_matches('/'));
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !href.ends_with('/') {
            continue;
        }
        let Some(pos) = href.find(&needle) else {
            continue;
        };
        let below_root = href[pos + needle.len()..].trim_end_matches('/');
        if below_root.is_empty() {
            continue;
        }
        let name = below_root.rsplit('/').next().unwrap_or(below_root);
        if name.is_empty() || name.contains('.') {
            continue;
        }
        folders.push(name.to_string());
    }
    folders
}

/// Loads the album catalog from the static file server.
pub struct CatalogLoader {
    client: reqwest::Client,
    base_url: String,
    albums_root: String,
}

impl CatalogLoader {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        albums_root: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            albums_root: albums_root.into().trim_matches('/').to_string(),
        }
    }

    /// Fetch the albums-root listing, then each candidate's metadata, one
    /// folder at a time. Albums whose metadata cannot be fetched or parsed
    /// are dropped; order is preserved among the survivors.
    pub async fn load(&self) -> Result<Vec<Album>, PlayerError> {
        let url = format!("{}/{}/", self.base_url, self.albums_root);
        debug!("fetching albums root listing: {}", url);

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

        let folders = parse_album_folders(&html, &self.albums_root);
        debug!("detected {} album folders", folders.len());

        let mut albums = Vec::with_capacity(folders.len());
        for folder in folders {
            match self.fetch_info(&folder).await {
                Ok(info) => albums.push(Album {
                    cover_path: format!("{}/{}/cover.jpg", self.albums_root, folder),
                    title: info.title,
                    description: info.description,
                    folder,
                }),
                Err(e) => warn!("skipping album folder '{}': {}", folder, e),
            }
        }
        Ok(albums)
    }

    /// One attempt, no retry. The query parameter defeats stale caches.
    async fn fetch_info(&self, folder: &str) -> Result<AlbumInfo, PlayerError> {
        let cachebust = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let url = format!(
            "{}/{}/{}/info.json?{}",
            self.base_url, self.albums_root, folder, cachebust
        );

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
        response
            .json::<AlbumInfo>()
            .await
            .map_err(|e| PlayerError::parse(&url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT_LISTING: &str = r#"
        <html><body>
            <a href="/songs/">../</a>
            <a href="/songs/ncs/">ncs/</a>
            <a href="/songs/cs/">cs/</a>
            <a href="/songs/index.html">index.html</a>
            <a href="/songs/v2.0/">v2.0/</a>
            <a href="/other/stuff/">stuff/</a>
            <a href="/songs/lofi/">lofi/</a>
        </body></html>
    "#;

    #[test]
    fn test_parse_album_folders_filters_files_and_foreign_paths() {
        let folders = parse_album_folders(ROOT_LISTING, "songs");
        // "index.html" is not a directory link, "v2.0" has a dot in its
        // final segment, "/other/stuff/" is outside the albums root, and
        // "/songs/" itself is not deeper than the root.
        assert_eq!(folders, vec!["ncs", "cs", "lofi"]);
    }

    #[test]
    fn test_parse_album_folders_with_absolute_hrefs() {
        let html = r#"<a href="http://h:1/songs/ambient/">ambient/</a>"#;
        assert_eq!(parse_album_folders(html, "songs"), vec!["ambient"]);
    }

    #[test]
    fn test_parse_album_folders_empty_listing() {
        assert!(parse_album_folders("<html></html>", "songs").is_empty());
    }
}
