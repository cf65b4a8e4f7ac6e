//! User preferences consulted by the window chrome.
//!
//! The chrome only needs a handful of values: whether the title bar is
//! locked in fullscreen, and the main window's last layout.
//! [`TomlPreferences`] keeps them in a TOML file under the platform config
//! directory; [`MemoryPreferences`] is for tests and secondary tools that
//! should not touch the user's files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use cardshell_core::logging::targets;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{ChromeError, Result};
use crate::window::WindowLayout;

/// File name of the preferences file inside the config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Preference storage used by the window chrome.
pub trait PreferenceStore {
    /// Whether the title bar stays visible in fullscreen.
    fn lock_title_bar(&self) -> bool;

    /// Change the title bar lock.
    fn set_lock_title_bar(&mut self, locked: bool);

    /// Last saved layout of the main window.
    fn window_layout(&self) -> Option<WindowLayout> {
        None
    }

    /// Remember the main window layout.
    fn set_window_layout(&mut self, _layout: WindowLayout) {}

    /// Write pending changes to durable storage.
    fn save(&self) -> Result<()>;
}

/// Serialized preference values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Keep the title bar visible in fullscreen.
    pub lock_title_bar: bool,
    /// Main window placement.
    pub main_window: Option<WindowLayout>,
}

/// Preferences persisted as a TOML file.
#[derive(Debug, Clone)]
pub struct TomlPreferences {
    path: PathBuf,
    values: Preferences,
}

impl TomlPreferences {
    /// Location of the preferences file in the platform config directory.
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "cardshell").map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
    }

    /// Load preferences from `path`.
    ///
    /// A missing file yields defaults; the file is created on the first
    /// [`save`](PreferenceStore::save).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|err| ChromeError::preferences(Some(path.clone()), err.to_string()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(target: targets::PREFS, path = %path.display(), "no preferences file, using defaults");
                Preferences::default()
            }
            Err(err) => return Err(ChromeError::preferences(Some(path), err.to_string())),
        };
        Ok(Self { path, values })
    }

    /// Load from [`default_path`](Self::default_path).
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()
            .ok_or_else(|| ChromeError::preferences(None, "no config directory available"))?;
        Self::load(path)
    }

    /// File backing these preferences.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current values.
    pub fn values(&self) -> &Preferences {
        &self.values
    }

    fn write(&self) -> std::io::Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let content = toml::to_string_pretty(&self.values)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;

        // Write beside the target so the rename stays on one filesystem.
        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl PreferenceStore for TomlPreferences {
    fn lock_title_bar(&self) -> bool {
        self.values.lock_title_bar
    }

    fn set_lock_title_bar(&mut self, locked: bool) {
        self.values.lock_title_bar = locked;
    }

    fn window_layout(&self) -> Option<WindowLayout> {
        self.values.main_window
    }

    fn set_window_layout(&mut self, layout: WindowLayout) {
        self.values.main_window = Some(layout);
    }

    fn save(&self) -> Result<()> {
        self.write()
            .map_err(|err| ChromeError::preferences(Some(self.path.clone()), err.to_string()))?;
        tracing::debug!(target: targets::PREFS, path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

/// In-memory preferences that count saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Preferences,
    saves: std::cell::Cell<usize>,
}

impl MemoryPreferences {
    /// Empty preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the title bar lock set.
    pub fn with_lock_title_bar(mut self, locked: bool) -> Self {
        self.values.lock_title_bar = locked;
        self
    }

    /// How many times [`save`](PreferenceStore::save) was called.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn lock_title_bar(&self) -> bool {
        self.values.lock_title_bar
    }

    fn set_lock_title_bar(&mut self, locked: bool) {
        self.values.lock_title_bar = locked;
    }

    fn window_layout(&self) -> Option<WindowLayout> {
        self.values.main_window
    }

    fn set_window_layout(&mut self, layout: WindowLayout) {
        self.values.main_window = Some(layout);
    }

    fn save(&self) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
