// src/core/settings.rs

use crate::{
    constants::{CONFIG_DIR_NAME, SETTINGS_FILENAME, SETTINGS_PATH_ENV},
    models::Settings,
};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while loading the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file exists but could not be read.
    #[error("Could not read settings file '{path}': {source}")]
    Read {
        /// The settings file.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for the settings.
    #[error("Could not parse settings file '{path}': {source}")]
    Parse {
        /// The settings file.
        path: String,
        /// The TOML decoding failure.
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for settings loading.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Returns the path of the settings file.
///
/// `MENUNAV_CONFIG` wins when set; otherwise the file lives in the `menunav`
/// directory under the system config dir (e.g. `~/.config/menunav/config.toml`).
/// Returns `None` when neither is available.
pub fn get_settings_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(SETTINGS_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILENAME))
}

/// Loads the user's settings, falling back to defaults when no file exists.
pub fn load_settings() -> SettingsResult<Settings> {
    match get_settings_path() {
        Some(path) => load_settings_from(&path),
        None => {
            log::debug!("No config directory available. Using default settings.");
            Ok(Settings::default())
        }
    }
}

/// Loads settings from an explicit path. A missing file is not an error.
///
/// # Errors
/// Fails if the file exists but cannot be read or is not valid TOML for [`Settings`].
pub fn load_settings_from(path: &Path) -> SettingsResult<Settings> {
    if !path.exists() {
        log::debug!(
            "Settings file '{}' not found. Using defaults.",
            path.display()
        );
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let settings = toml::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    log::info!("Loaded settings from '{}'.", path.display());
    Ok(settings)
}
