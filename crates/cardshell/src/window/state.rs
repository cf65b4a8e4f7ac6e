//! Window state record.

use crate::error::{ChromeError, Result};

/// Minimized / maximized / fullscreen flags of a window.
///
/// Fullscreen and minimized are mutually exclusive; [`WindowState::new`]
/// rejects the combination. Maximized is independent: a maximized window
/// that goes fullscreen remembers it was maximized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowState {
    minimized: bool,
    maximized: bool,
    fullscreen: bool,
}

impl WindowState {
    /// Neither minimized, maximized nor fullscreen.
    pub const NORMAL: Self = Self {
        minimized: false,
        maximized: false,
        fullscreen: false,
    };

    /// Build a state, rejecting fullscreen together with minimized.
    pub fn new(minimized: bool, maximized: bool, fullscreen: bool) -> Result<Self> {
        if minimized && fullscreen {
            return Err(ChromeError::InvalidState);
        }
        Ok(Self {
            minimized,
            maximized,
            fullscreen,
        })
    }

    /// Whether minimized.
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Whether maximized.
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Whether fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether none of the flags hold.
    pub fn is_normal(&self) -> bool {
        !self.minimized && !self.maximized && !self.fullscreen
    }

    /// Copy with the minimized flag changed. Minimizing clears fullscreen.
    pub fn with_minimized(self, minimized: bool) -> Self {
        Self {
            minimized,
            fullscreen: self.fullscreen && !minimized,
            ..self
        }
    }

    /// Copy with the maximized flag changed.
    pub fn with_maximized(self, maximized: bool) -> Self {
        Self { maximized, ..self }
    }

    /// Copy with the fullscreen flag changed. Going fullscreen clears minimized.
    pub fn with_fullscreen(self, fullscreen: bool) -> Self {
        Self {
            fullscreen,
            minimized: self.minimized && !fullscreen,
            ..self
        }
    }
}

/// Fullscreen state tracked by the native macOS strategy.
///
/// The window manager cannot be asked, so the state is recorded from the
/// transition notifications it sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NativeFullscreenState {
    /// The window is not fullscreen.
    #[default]
    Windowed,
    /// The window is fullscreen.
    Fullscreen,
}
