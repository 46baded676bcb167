use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// The static file server the player fetches listings and audio from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Path under the server root that holds one folder per album.
    #[serde(default = "default_albums_root")]
    pub albums_root: String,
    /// Suffix that marks a listing entry as playable.
    #[serde(default = "default_audio_ext")]
    pub audio_ext: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Startup volume, 0..=100.
    #[serde(default = "default_volume")]
    pub default_volume: u8,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            albums_root: default_albums_root(),
            audio_ext: default_audio_ext(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_volume: default_volume(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_albums_root() -> String {
    "songs".to_string()
}

fn default_audio_ext() -> String {
    ".mp3".to_string()
}

fn default_volume() -> u8 {
    100
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shelf")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.server.base_url.starts_with("http://"));
        assert_eq!(config.library.albums_root, "songs");
        assert_eq!(config.library.audio_ext, ".mp3");
        assert_eq!(config.playback.default_volume, 100);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [library]
            albums_root = "music/albums"
            "#,
        )
        .unwrap();
        assert_eq!(config.library.albums_root, "music/albums");
        assert_eq!(config.library.audio_ext, ".mp3");
        assert!(config.server.base_url.starts_with("http://"));
    }
}
