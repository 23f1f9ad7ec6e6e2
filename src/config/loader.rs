//! Configuration file loading

use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Load configuration from the default path, falling back to defaults
pub fn load() -> Config {
    match default_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Load configuration from a specific path
///
/// A missing file yields the defaults; an unreadable or invalid file is
/// logged and ignored rather than aborting startup.
pub fn load_from(path: &Path) -> Config {
    let Ok(contents) = fs::read_to_string(path) else {
        return Config::default();
    };

    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring invalid config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("navpage").join("config.toml"))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
