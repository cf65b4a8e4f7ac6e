//! Seams between the window chrome and the platform.
//!
//! [`WindowChrome`](super::WindowChrome) never talks to winit directly. It
//! drives a [`WindowHost`] for the native window and display geometry, a
//! [`TitleBar`] for the drawn caption, and on macOS a
//! [`NativeFullscreenBridge`] for the system fullscreen transition.
//! [`WinitHost`](super::WinitHost) and
//! [`WinitFullscreenBridge`](super::WinitFullscreenBridge) are the
//! production implementations; tests substitute recording fakes.

use cursor_icon::CursorIcon;

use super::geometry::{Point, Rect, Size};
use super::icon::WindowIcon;
use super::state::WindowState;
use crate::error::Result;

/// The native window and the display it lives on.
pub trait WindowHost {
    /// Outer bounds in screen coordinates.
    fn bounds(&self) -> Rect;

    /// Move and resize the window.
    fn set_bounds(&self, bounds: Rect);

    /// Move the window.
    fn set_location(&self, location: Point) {
        let bounds = self.bounds();
        self.set_bounds(bounds.with_origin(location));
    }

    /// Resize the window.
    fn set_size(&self, size: Size) {
        let bounds = self.bounds();
        self.set_bounds(bounds.with_size(size));
    }

    /// Smallest size the window accepts.
    fn min_size(&self) -> Size;

    /// Largest size the window accepts, if limited.
    fn max_size(&self) -> Option<Size>;

    /// Whether the window has been shown.
    fn is_visible(&self) -> bool;

    /// Ask the window manager to minimize or restore.
    fn set_minimized(&self, minimized: bool);

    /// Ask the window manager to maximize or restore.
    fn set_maximized(&self, maximized: bool);

    /// Minimized state as the window manager reports it, if it can.
    fn is_minimized(&self) -> Option<bool> {
        None
    }

    /// Maximized state as the window manager reports it, if it can.
    fn is_maximized(&self) -> Option<bool> {
        None
    }

    /// Enter or leave host-driven fullscreen.
    fn set_fullscreen(&self, fullscreen: bool);

    /// Whether the host currently reports fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Bounds of the display containing the window.
    fn display_bounds(&self) -> Rect;

    /// Usable area of that display (excludes taskbars and docks).
    fn work_area(&self) -> Rect;

    /// Limit the bounds the window manager uses when maximizing.
    ///
    /// Only meaningful on Windows, where an undecorated window would
    /// otherwise maximize over the taskbar.
    fn set_maximized_bounds_hint(&self, _bounds: Option<Rect>) {}

    /// Show or hide the drawn border.
    fn set_border_visible(&self, visible: bool);

    /// Change the pointer shape over the window.
    fn set_cursor(&self, cursor: CursorIcon);

    /// Set the window title.
    fn set_title(&self, title: &str);

    /// Set or clear the icon the window manager shows.
    fn set_icon(&self, icon: Option<&WindowIcon>);

    /// Ask the content to lay itself out again.
    fn request_relayout(&self);
}

/// The drawn title bar.
pub trait TitleBar {
    /// Refresh the minimize / maximize / fullscreen buttons for `state`.
    fn update_buttons(&self, state: WindowState);

    /// Show or hide the title bar.
    fn set_visible(&self, visible: bool);

    /// Change the displayed title.
    fn set_title(&self, title: &str);

    /// Change the displayed icon.
    fn set_icon(&self, icon: Option<&WindowIcon>);
}

/// Platform-native fullscreen (macOS Spaces).
///
/// Requests are asynchronous: the outcome is reported back to the chrome
/// as a [`NativeFullscreenEvent`](super::NativeFullscreenEvent).
pub trait NativeFullscreenBridge {
    /// Hook up native fullscreen support for the window.
    fn install(&mut self) -> Result<()>;

    /// Ask the window manager to enter or leave fullscreen.
    fn request_toggle(&mut self, enter: bool);
}
