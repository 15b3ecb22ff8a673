// src/infra/paths.rs - Path management
//
// All paths respect the BRIGHTSIDE_HOME environment variable for isolation.
// When BRIGHTSIDE_HOME is set, config lives directly under that directory.
// When unset, config uses ~/.brightside/.

use std::path::{Path, PathBuf};

/// Returns the BRIGHTSIDE_HOME override, if set.
fn brightside_home() -> Option<PathBuf> {
    std::env::var_os("BRIGHTSIDE_HOME").map(PathBuf::from)
}

/// Home directory. Falls back to the current directory on systems without one.
pub fn dirs_home() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $BRIGHTSIDE_HOME/ or ~/.brightside/
pub fn config_dir() -> PathBuf {
    if let Some(home) = brightside_home() {
        return home;
    }
    dirs_home().join(".brightside")
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// News sources file. Kept at the historical location in $HOME.
pub fn default_news_sources_path() -> PathBuf {
    if let Some(home) = brightside_home() {
        return home.join("news.json");
    }
    dirs_home().join(".brightside_news.json")
}

/// Where downloads land unless configured otherwise.
pub fn default_download_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| dirs_home().join("Downloads"))
}

/// Oh My Zsh install root.
pub fn oh_my_zsh_dir() -> PathBuf {
    dirs_home().join(".oh-my-zsh")
}

/// ZSH_CUSTOM as Oh My Zsh defines it.
pub fn zsh_custom_dir() -> PathBuf {
    oh_my_zsh_dir().join("custom")
}

/// Expand a leading `~/` against the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs_home().join(rest),
        None if path == "~" => dirs_home(),
        None => PathBuf::from(path),
    }
}
