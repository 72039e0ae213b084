//! Persisted editor settings.
//!
//! A small JSON file under the platform config directory. Loading never
//! fails the editor: a missing or unreadable file falls back to defaults
//! (with a warning for the unreadable case). Settings are loaded once at
//! startup and passed by value; nothing reads them through a global.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::format::IndentUnit;

/// Terminal color theme for the rendered styles.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// User-facing editor settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whitespace inserted per indentation level.
    pub indent: IndentUnit,
    /// Color theme for heading/emphasis styling.
    pub theme: Theme,
}

/// Platform config file location: `<config dir>/mdpad/settings.json`.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("mdpad");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("mdpad");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("mdpad");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("mdpad");
        }
    }

    PathBuf::from(".mdpad")
}

/// Load settings from `path`, falling back to defaults when the file does
/// not exist or cannot be parsed.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    match fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|json| serde_json::from_str(&json).map_err(anyhow::Error::from))
    {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("ignoring unreadable settings {}: {err}", path.display());
            Settings::default()
        }
    }
}

/// Save settings as pretty-printed JSON, creating the directory if needed.
pub fn save_settings(path: &Path, settings: Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&settings).context("Failed to encode settings")?;
    fs::write(path, json).with_context(|| format!("Failed to write settings {}", path.display()))
}
