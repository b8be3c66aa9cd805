// Theme preference persistence
//
// One key-value pair in a JSON preferences file under the user's config
// directory. Reads never fail: absent, unreadable, or unrecognized values
// all degrade to "nothing stored" and the page falls back to its default
// theme. A failed write just leaves the session memoryless.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by preference writes.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("cannot create preferences directory: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("cannot serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("cannot write preferences file: {0}")]
    Write(#[source] std::io::Error),
}

/// Storage capability for the theme preference. Injected into the app
/// state so the theme controller is testable without touching the real
/// filesystem.
pub trait ThemeStore {
    /// Read the stored theme, if anything usable is stored.
    fn load(&self) -> Option<Theme>;

    /// Persist the theme.
    fn save(&self, theme: Theme) -> Result<(), PrefsError>;
}

/// On-disk shape of the preferences file.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct PrefsFile {
    theme: String,
}

/// JSON-file-backed theme store.
pub struct JsonPrefs {
    path: PathBuf,
}

impl JsonPrefs {
    /// Store at the default location:
    /// $XDG_CONFIG_HOME/nook/prefs.json, or $HOME/.config/nook/prefs.json.
    pub fn new() -> Self {
        Self {
            path: default_path(),
        }
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for JsonPrefs {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for JsonPrefs {
    fn load(&self) -> Option<Theme> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let prefs: PrefsFile = serde_json::from_str(&contents).ok()?;
        Theme::from_name(&prefs.theme)
    }

    fn save(&self, theme: Theme) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(PrefsError::CreateDir)?;
        }
        let prefs = PrefsFile {
            theme: theme.name().to_string(),
        };
        let json = serde_json::to_string_pretty(&prefs).map_err(PrefsError::Serialize)?;
        fs::write(&self.path, json).map_err(PrefsError::Write)?;
        Ok(())
    }
}

fn default_path() -> PathBuf {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    config_home.join("nook").join("prefs.json")
}
