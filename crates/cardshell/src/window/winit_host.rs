//! [`WindowHost`] and [`NativeFullscreenBridge`] over a winit window.

use std::cell::Cell;
use std::sync::Arc;

use cardshell_core::logging::targets;
use cursor_icon::CursorIcon;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::{Fullscreen, Window, WindowAttributes};

use super::geometry::{Point, Rect, Size};
use super::host::{NativeFullscreenBridge, WindowHost};
use super::icon::WindowIcon;
use crate::error::{ChromeError, Result};

/// Attributes for an undecorated window at `bounds`.
pub fn frameless_attributes(title: &str, bounds: Rect) -> WindowAttributes {
    Window::default_attributes()
        .with_title(title)
        .with_decorations(false)
        .with_visible(false)
        .with_position(PhysicalPosition::new(bounds.x, bounds.y))
        .with_inner_size(physical_size(bounds.size()))
}

fn physical_size(size: Size) -> PhysicalSize<u32> {
    PhysicalSize::new(size.width.max(1) as u32, size.height.max(1) as u32)
}

fn rect_from(position: PhysicalPosition<i32>, size: PhysicalSize<u32>) -> Rect {
    Rect::new(position.x, position.y, size.width as i32, size.height as i32)
}

/// A frameless winit window.
pub struct WinitHost {
    window: Arc<Window>,
    min_size: Size,
    max_size: Option<Size>,
    border_visible: Cell<bool>,
}

impl WinitHost {
    /// Default minimum window size.
    pub const DEFAULT_MIN_SIZE: Size = Size::new(640, 480);

    /// Wrap `window`, applying the default minimum size.
    pub fn new(window: Arc<Window>) -> Self {
        let host = Self {
            window,
            min_size: Self::DEFAULT_MIN_SIZE,
            max_size: None,
            border_visible: Cell::new(true),
        };
        host.window
            .set_min_inner_size(Some(physical_size(host.min_size)));
        host
    }

    /// Set the minimum size.
    pub fn with_min_size(mut self, size: Size) -> Self {
        self.min_size = size;
        self.window.set_min_inner_size(Some(physical_size(size)));
        self
    }

    /// Set the maximum size.
    pub fn with_max_size(mut self, size: Size) -> Self {
        self.max_size = Some(size);
        self.window.set_max_inner_size(Some(physical_size(size)));
        self
    }

    /// The wrapped window.
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Whether the drawn border should be painted.
    pub fn border_visible(&self) -> bool {
        self.border_visible.get()
    }
}

impl WindowHost for WinitHost {
    fn bounds(&self) -> Rect {
        let position = self.window.outer_position().unwrap_or_default();
        rect_from(position, self.window.outer_size())
    }

    fn set_bounds(&self, bounds: Rect) {
        self.window
            .set_outer_position(PhysicalPosition::new(bounds.x, bounds.y));
        // The platform may apply the size asynchronously; `Resized` follows.
        let _ = self.window.request_inner_size(physical_size(bounds.size()));
    }

    fn set_location(&self, location: Point) {
        self.window
            .set_outer_position(PhysicalPosition::new(location.x, location.y));
    }

    fn set_size(&self, size: Size) {
        let _ = self.window.request_inner_size(physical_size(size));
    }

    fn min_size(&self) -> Size {
        self.min_size
    }

    fn max_size(&self) -> Option<Size> {
        self.max_size
    }

    fn is_visible(&self) -> bool {
        self.window.is_visible().unwrap_or(true)
    }

    fn is_minimized(&self) -> Option<bool> {
        self.window.is_minimized()
    }

    fn is_maximized(&self) -> Option<bool> {
        Some(self.window.is_maximized())
    }

    fn set_minimized(&self, minimized: bool) {
        self.window.set_minimized(minimized);
    }

    fn set_maximized(&self, maximized: bool) {
        self.window.set_maximized(maximized);
    }

    fn set_fullscreen(&self, fullscreen: bool) {
        self.window
            .set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn display_bounds(&self) -> Rect {
        self.window
            .current_monitor()
            .map(|monitor| rect_from(monitor.position(), monitor.size()))
            .unwrap_or_else(|| self.bounds())
    }

    // winit does not expose the work area, so the whole display is used.
    fn work_area(&self) -> Rect {
        self.display_bounds()
    }

    fn set_border_visible(&self, visible: bool) {
        self.border_visible.set(visible);
        self.window.request_redraw();
    }

    fn set_cursor(&self, cursor: CursorIcon) {
        self.window.set_cursor(cursor);
    }

    fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    fn set_icon(&self, icon: Option<&WindowIcon>) {
        let icon = match icon.map(WindowIcon::to_winit_icon).transpose() {
            Ok(icon) => icon,
            Err(err) => {
                tracing::warn!(target: targets::WINDOW, error = %err, "failed to convert window icon");
                return;
            }
        };
        self.window.set_window_icon(icon);
    }

    fn request_relayout(&self) {
        self.window.request_redraw();
    }
}

/// Native fullscreen through winit's borderless fullscreen.
///
/// On macOS winit runs the system Spaces transition for borderless
/// fullscreen, and the window reports it through `Resized` events.
pub struct WinitFullscreenBridge {
    window: Arc<Window>,
}

impl WinitFullscreenBridge {
    /// Bridge for `window`.
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl NativeFullscreenBridge for WinitFullscreenBridge {
    fn install(&mut self) -> Result<()> {
        if !cfg!(target_os = "macos") {
            return Err(ChromeError::NativeFullscreenUnavailable(
                "native fullscreen requires macOS".to_string(),
            ));
        }
        if self.window.current_monitor().is_none() {
            return Err(ChromeError::NativeFullscreenUnavailable(
                "window has no monitor".to_string(),
            ));
        }
        Ok(())
    }

    fn request_toggle(&mut self, enter: bool) {
        tracing::debug!(target: targets::FULLSCREEN, enter, "requesting native fullscreen transition");
        self.window
            .set_fullscreen(enter.then_some(Fullscreen::Borderless(None)));
    }
}
