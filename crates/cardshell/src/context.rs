//! Process-wide collaborators handed to each window.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use cardshell_core::Os;

use crate::pause::PauseHook;
use crate::prefs::{MemoryPreferences, PreferenceStore};
use crate::window::{NativeFullscreenBridge, PlatformFullscreenController};

/// Shared preference store.
pub type SharedPreferences = Rc<RefCell<dyn PreferenceStore>>;

// Everything here belongs to the UI thread.
static_assertions::assert_not_impl_any!(ShellContext: Send, Sync);

/// Everything a [`WindowChrome`](crate::window::WindowChrome) needs from
/// the rest of the application.
///
/// The OS, preferences and pause hook are shared between windows; the
/// fullscreen controller belongs to one window.
pub struct ShellContext {
    os: Os,
    preferences: SharedPreferences,
    pause_hook: Rc<PauseHook>,
    fullscreen: PlatformFullscreenController,
}

impl fmt::Debug for ShellContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellContext")
            .field("os", &self.os)
            .field("paused", &self.pause_hook.is_paused())
            .field("fullscreen", &self.fullscreen)
            .finish_non_exhaustive()
    }
}

impl ShellContext {
    /// A context with generic fullscreen.
    pub fn new(os: Os, preferences: SharedPreferences, pause_hook: Rc<PauseHook>) -> Self {
        Self {
            os,
            preferences,
            pause_hook,
            fullscreen: PlatformFullscreenController::Generic,
        }
    }

    /// Detected OS, in-memory preferences and a fresh pause hook.
    pub fn detect() -> Self {
        Self::new(
            Os::detect(),
            Rc::new(RefCell::new(MemoryPreferences::new())),
            Rc::new(PauseHook::new()),
        )
    }

    /// Select the fullscreen strategy, offering `bridge` for native support.
    pub fn with_native_fullscreen(mut self, bridge: Box<dyn NativeFullscreenBridge>) -> Self {
        self.fullscreen = PlatformFullscreenController::select(self.os, Some(bridge));
        self
    }

    /// A context for another window, sharing preferences and the pause hook.
    ///
    /// The new context starts with generic fullscreen.
    pub fn share(&self) -> Self {
        Self::new(self.os, self.preferences.clone(), self.pause_hook.clone())
    }

    /// Detected OS.
    pub fn os(&self) -> Os {
        self.os
    }

    /// Shared preferences.
    pub fn preferences(&self) -> &SharedPreferences {
        &self.preferences
    }

    /// Shared pause hook.
    pub fn pause_hook(&self) -> &Rc<PauseHook> {
        &self.pause_hook
    }

    /// Selected fullscreen strategy.
    pub fn fullscreen(&self) -> &PlatformFullscreenController {
        &self.fullscreen
    }

    pub(crate) fn into_parts(
        self,
    ) -> (Os, SharedPreferences, Rc<PauseHook>, PlatformFullscreenController) {
        (self.os, self.preferences, self.pause_hook, self.fullscreen)
    }
}
