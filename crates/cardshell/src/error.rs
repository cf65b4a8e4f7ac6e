//! Error types for window chrome and preferences.

use std::fmt;
use std::path::PathBuf;

/// Errors from window chrome operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    /// A window state combining fullscreen and minimized was requested.
    InvalidState,
    /// Icon pixels did not match the stated dimensions.
    InvalidIcon(String),
    /// Native fullscreen support could not be installed.
    NativeFullscreenUnavailable(String),
    /// Preferences could not be read or written.
    Preferences {
        /// File involved, if any.
        path: Option<PathBuf>,
        /// What went wrong.
        message: String,
    },
}

impl ChromeError {
    /// A preferences error for `path`.
    pub fn preferences(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::Preferences {
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for ChromeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState => write!(f, "A window cannot be fullscreen and minimized at once"),
            Self::InvalidIcon(msg) => write!(f, "Invalid window icon: {msg}"),
            Self::NativeFullscreenUnavailable(msg) => {
                write!(f, "Native fullscreen unavailable: {msg}")
            }
            Self::Preferences { path, message } => match path {
                Some(path) => write!(f, "Preferences error ({}): {message}", path.display()),
                None => write!(f, "Preferences error: {message}"),
            },
        }
    }
}

impl std::error::Error for ChromeError {}

impl From<toml::de::Error> for ChromeError {
    fn from(err: toml::de::Error) -> Self {
        Self::preferences(None, err.to_string())
    }
}

impl From<toml::ser::Error> for ChromeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::preferences(None, err.to_string())
    }
}

/// A specialized Result type for window chrome operations.
pub type Result<T> = std::result::Result<T, ChromeError>;
