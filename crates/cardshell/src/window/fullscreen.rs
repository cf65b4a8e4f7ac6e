//! Fullscreen strategies.
//!
//! Most platforms let the shell flip fullscreen synchronously through the
//! host. macOS instead runs an animated Spaces transition that the window
//! manager owns; the shell asks for it and learns the outcome later. The
//! strategy is picked once per window when the [`ShellContext`] is built
//! and never changes afterwards.
//!
//! [`ShellContext`]: crate::ShellContext

use std::fmt;
use std::time::{Duration, Instant};

use cardshell_core::logging::targets;
use cardshell_core::{OneShot, Os};

use super::geometry::Rect;
use super::host::NativeFullscreenBridge;
use super::state::NativeFullscreenState;

/// A native fullscreen transition reported by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeFullscreenEvent {
    /// The window is entering fullscreen.
    Entering,
    /// The window is leaving fullscreen.
    Exiting,
}

/// How a window enters and leaves fullscreen.
pub enum PlatformFullscreenController {
    /// Host-driven, synchronous fullscreen.
    Generic,
    /// macOS native fullscreen.
    NativeMac(NativeMacController),
}

impl fmt::Debug for PlatformFullscreenController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => f.write_str("Generic"),
            Self::NativeMac(native) => f.debug_tuple("NativeMac").field(native).finish(),
        }
    }
}

impl Default for PlatformFullscreenController {
    fn default() -> Self {
        Self::Generic
    }
}

impl PlatformFullscreenController {
    /// Pick the strategy for `os`.
    ///
    /// Native fullscreen is used on macOS when a bridge is supplied and
    /// installs cleanly. An install failure is logged and the generic
    /// strategy is used instead.
    pub fn select(os: Os, bridge: Option<Box<dyn NativeFullscreenBridge>>) -> Self {
        let Some(mut bridge) = bridge.filter(|_| os.is_macos()) else {
            return Self::Generic;
        };

        match bridge.install() {
            Ok(()) => {
                tracing::debug!(target: targets::FULLSCREEN, "native fullscreen installed");
                Self::NativeMac(NativeMacController::new(bridge))
            }
            Err(err) => {
                tracing::warn!(
                    target: targets::FULLSCREEN,
                    error = %err,
                    "native fullscreen unavailable, using generic fullscreen"
                );
                Self::Generic
            }
        }
    }

    /// Whether macOS fullscreen rules apply.
    pub fn uses_native_rules(&self) -> bool {
        matches!(self, Self::NativeMac(_))
    }

    /// The native controller, if selected.
    pub fn native(&self) -> Option<&NativeMacController> {
        match self {
            Self::NativeMac(native) => Some(native),
            Self::Generic => None,
        }
    }

    /// Mutable access to the native controller, if selected.
    pub fn native_mut(&mut self) -> Option<&mut NativeMacController> {
        match self {
            Self::NativeMac(native) => Some(native),
            Self::Generic => None,
        }
    }
}

/// Bookkeeping for macOS native fullscreen.
pub struct NativeMacController {
    bridge: Box<dyn NativeFullscreenBridge>,
    state: NativeFullscreenState,
    pending: Option<bool>,
    replay: OneShot,
    saved_bounds: Option<Rect>,
}

impl fmt::Debug for NativeMacController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeMacController")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("saved_bounds", &self.saved_bounds)
            .finish_non_exhaustive()
    }
}

impl NativeMacController {
    fn new(bridge: Box<dyn NativeFullscreenBridge>) -> Self {
        Self {
            bridge,
            state: NativeFullscreenState::default(),
            pending: None,
            replay: OneShot::new(),
            saved_bounds: None,
        }
    }

    /// Tracked fullscreen state.
    pub fn state(&self) -> NativeFullscreenState {
        self.state
    }

    /// Whether the window is natively fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.state == NativeFullscreenState::Fullscreen
    }

    /// Request held back until the window is shown.
    pub fn pending(&self) -> Option<bool> {
        self.pending
    }

    /// Bounds saved when fullscreen was entered.
    pub fn saved_bounds(&self) -> Option<Rect> {
        self.saved_bounds
    }

    /// Remember a request made while the window is hidden.
    pub(crate) fn defer(&mut self, fullscreen: bool) {
        tracing::debug!(target: targets::FULLSCREEN, fullscreen, "deferring native fullscreen until shown");
        self.pending = Some(fullscreen);
    }

    /// Ask the window manager for a transition if it would change anything.
    ///
    /// Returns whether a request was sent.
    pub(crate) fn request(&mut self, fullscreen: bool) -> bool {
        if fullscreen == self.is_fullscreen() {
            return false;
        }
        self.bridge.request_toggle(fullscreen);
        true
    }

    /// Arm the replay of a deferred request.
    pub(crate) fn schedule_pending(&mut self, now: Instant, delay: Duration) {
        if self.pending.is_some() {
            self.replay.schedule(now, delay);
        }
    }

    /// The deferred request, once its replay delay has passed.
    pub(crate) fn poll_pending(&mut self, now: Instant) -> Option<bool> {
        if self.replay.poll(now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// When the deferred request is due.
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.replay.deadline()
    }

    /// Record entering fullscreen with the window at `current`.
    pub(crate) fn entering(&mut self, current: Rect) {
        self.state = NativeFullscreenState::Fullscreen;
        self.saved_bounds = Some(current);
    }

    /// Record leaving fullscreen, yielding the bounds to restore.
    pub(crate) fn exiting(&mut self) -> Option<Rect> {
        self.state = NativeFullscreenState::Windowed;
        self.saved_bounds.take()
    }
}
