//! Settings persistence
//!
//! Both binaries read an optional JSON settings file. By default it lives in
//! the platform config directory, e.g. `~/.config/netchess/server.json` on
//! Linux. A missing file is normal; an unreadable or invalid one is logged
//! and defaults are used instead.

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolve `file_name` inside the user's config directory
///
/// Falls back to the current directory if the platform has no config dir.
pub fn settings_path(file_name: &str) -> PathBuf {
    match ProjectDirs::from("com", "netchess", "netchess") {
        Some(dirs) => dirs.config_dir().join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Load settings from `path`, or `T::default()` if that is not possible
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        info!("[SETTINGS] No settings file at {:?}, using defaults", path);
        return T::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<T>(&contents) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                T::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                path, e
            );
            T::default()
        }
    }
}

/// Write settings as pretty JSON, creating parent directories
pub fn save<T: Serialize>(path: &Path, settings: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
    fs::write(path, json)
}
