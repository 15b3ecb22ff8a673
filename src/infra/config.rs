// src/infra/config.rs - Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::errors::BrightsideError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,

    #[serde(default)]
    pub grab: GrabConfig,

    #[serde(default)]
    pub news: NewsConfig,

    #[serde(default)]
    pub twitch: TwitchConfig,

    #[serde(default)]
    pub setup: SetupConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Encoder binary invoked as `<encoder> -i <input> <output>`.
    pub encoder: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            encoder: "ffmpeg".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabConfig {
    /// Where yt-dlp writes videos. `~/` is expanded. Defaults to the user's download dir.
    pub download_dir: Option<String>,
    /// Hosts handed to yt-dlp instead of wget/curl. Subdomains match too.
    pub video_hosts: Vec<String>,
    pub video_format: String,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            video_hosts: vec![
                "youtube.com".into(),
                "youtu.be".into(),
                "tiktok.com".into(),
            ],
            video_format: "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]".into(),
        }
    }
}

impl GrabConfig {
    pub fn download_dir(&self) -> PathBuf {
        match &self.download_dir {
            Some(dir) => paths::expand_home(dir),
            None => paths::default_download_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub sources_file: Option<String>,
    pub default_limit: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            sources_file: None,
            default_limit: 5,
        }
    }
}

impl NewsConfig {
    pub fn sources_path(&self) -> PathBuf {
        match &self.sources_file {
            Some(file) => paths::expand_home(file),
            None => paths::default_news_sources_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitchConfig {
    /// How long to wait for the first message from chat before giving up.
    pub connect_timeout_secs: u64,
}

impl Default for TwitchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub install_path: String,
    pub mac_packages: Vec<String>,
    pub linux_packages: Vec<String>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        let common = ["git", "yt-dlp", "ffmpeg", "wget", "zsh"];
        let with = |extra: &str| {
            common
                .iter()
                .map(|p| p.to_string())
                .chain(std::iter::once(extra.to_string()))
                .collect::<Vec<_>>()
        };
        Self {
            install_path: "/usr/local/bin/brightside".into(),
            mac_packages: with("font-hack-nerd-font"),
            linux_packages: with("fonts-powerline"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub keys: KeysConfig,
}

/// Key names bound to each menu action. See `tui::keys` for the name grammar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub select: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            up: vec!["up".into(), "k".into()],
            down: vec!["down".into(), "j".into()],
            select: vec!["enter".into()],
            quit: vec!["q".into(), "Q".into(), "esc".into(), "ctrl-c".into()],
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self, BrightsideError> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, BrightsideError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.convert.encoder, "ffmpeg");
        assert_eq!(c.news.default_limit, 5);
        assert_eq!(c.twitch.connect_timeout_secs, 15);
        assert_eq!(c.grab.video_hosts.len(), 3);
        assert_eq!(c.setup.install_path, "/usr/local/bin/brightside");
    }

    #[test]
    fn test_setup_package_lists() {
        let s = SetupConfig::default();
        assert_eq!(s.mac_packages.last().unwrap(), "font-hack-nerd-font");
        assert_eq!(s.linux_packages.last().unwrap(), "fonts-powerline");
        assert!(s.linux_packages.contains(&"yt-dlp".to_string()));
        assert_eq!(s.mac_packages.len(), 6);
    }

    #[test]
    fn test_keys_defaults() {
        let k = KeysConfig::default();
        assert_eq!(k.up, vec!["up", "k"]);
        assert_eq!(k.down, vec!["down", "j"]);
        assert_eq!(k.select, vec!["enter"]);
        assert!(k.quit.contains(&"q".to_string()));
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.news.default_limit, 5);
        assert_eq!(config.dashboard.keys.select, vec!["enter"]);
    }

    #[test]
    fn test_parse_partial_section_keeps_other_defaults() {
        let toml_str = r#"
[grab]
download_dir = "/srv/media"

[dashboard.keys]
quit = ["x"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.grab.download_dir(), PathBuf::from("/srv/media"));
        assert_eq!(config.grab.video_hosts.len(), 3);
        assert_eq!(config.dashboard.keys.quit, vec!["x"]);
        assert_eq!(config.dashboard.keys.up, vec!["up", "k"]);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[convert]
encoder = "/opt/ffmpeg/bin/ffmpeg"

[news]
sources_file = "/etc/brightside/news.json"
default_limit = 10

[twitch]
connect_timeout_secs = 30

[setup]
install_path = "/opt/bin/brightside"
mac_packages = ["git"]
linux_packages = []
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.convert.encoder, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(config.news.default_limit, 10);
        assert_eq!(
            config.news.sources_path(),
            PathBuf::from("/etc/brightside/news.json")
        );
        assert_eq!(config.twitch.connect_timeout_secs, 30);
        assert_eq!(config.setup.mac_packages, vec!["git"]);
        assert!(config.setup.linux_packages.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[news]\ndefault_limit = 2\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.news.default_limit, 2);
    }

    #[test]
    fn test_load_invalid_toml_is_toml_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[news\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, BrightsideError::Toml(_)));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(BrightsideError::Io(_))));
    }
}
