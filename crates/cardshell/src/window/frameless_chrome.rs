//! Hit testing for the frameless window's custom chrome.
//!
//! The shell draws its own title bar and border, so the window manager
//! never sees a resize edge or caption. [`FramelessWindowChrome`] maps a
//! window-local pointer position to the region it falls in:
//!
//! - **Resize grab zone**: a band of `2 × border_thickness` pixels along
//!   every edge. Corners are tested before edges, so the corner squares
//!   win where two bands overlap.
//! - **Caption**: the title bar strip below the top grab zone.
//! - **Client**: everything else.
//!
//! ```
//! use cardshell::window::{ChromeHitTestResult, FramelessWindowChrome, Point, ResizeDirection, Size};
//!
//! let chrome = FramelessWindowChrome::new().with_border_thickness(3);
//! let size = Size::new(800, 600);
//!
//! assert_eq!(
//!     chrome.hit_test(Point::new(2, 2), size),
//!     ChromeHitTestResult::ResizeBorder(ResizeDirection::NorthWest)
//! );
//! assert_eq!(chrome.hit_test(Point::new(400, 300), size), ChromeHitTestResult::Client);
//! ```

use cursor_icon::CursorIcon;

use super::geometry::{Point, Size};

pub use winit::window::ResizeDirection;

/// Default border thickness in pixels.
pub const DEFAULT_BORDER_THICKNESS: i32 = 3;

/// Default title bar height in pixels.
pub const DEFAULT_TITLE_BAR_HEIGHT: i32 = 30;

/// What lies under a window-local point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHitTestResult {
    /// Regular content.
    Client,
    /// The title bar; dragging moves the window.
    Caption,
    /// A resize grab zone.
    ResizeBorder(ResizeDirection),
}

impl ChromeHitTestResult {
    /// Whether this is a resize grab zone.
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::ResizeBorder(_))
    }

    /// Whether dragging here moves the window.
    pub fn is_draggable(&self) -> bool {
        matches!(self, Self::Caption)
    }
}

/// Chrome metrics used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramelessWindowChrome {
    border_thickness: i32,
    title_bar_height: i32,
    resize_enabled: bool,
}

impl Default for FramelessWindowChrome {
    fn default() -> Self {
        Self::new()
    }
}

impl FramelessWindowChrome {
    /// Chrome with the default border and title bar.
    pub fn new() -> Self {
        Self {
            border_thickness: DEFAULT_BORDER_THICKNESS,
            title_bar_height: DEFAULT_TITLE_BAR_HEIGHT,
            resize_enabled: true,
        }
    }

    /// Set the border thickness. Negative values become zero.
    pub fn with_border_thickness(mut self, thickness: i32) -> Self {
        self.border_thickness = thickness.max(0);
        self
    }

    /// Set the title bar height. Negative values become zero.
    pub fn with_title_bar_height(mut self, height: i32) -> Self {
        self.title_bar_height = height.max(0);
        self
    }

    /// Enable or disable edge resizing.
    pub fn with_resize_enabled(mut self, enabled: bool) -> Self {
        self.resize_enabled = enabled;
        self
    }

    /// Enable or disable edge resizing at runtime.
    pub fn set_resize_enabled(&mut self, enabled: bool) {
        self.resize_enabled = enabled;
    }

    /// Set the title bar height at runtime.
    pub fn set_title_bar_height(&mut self, height: i32) {
        self.title_bar_height = height.max(0);
    }

    /// Border thickness.
    pub fn border_thickness(&self) -> i32 {
        self.border_thickness
    }

    /// Title bar height.
    pub fn title_bar_height(&self) -> i32 {
        self.title_bar_height
    }

    /// Width of the resize grab zone along each edge.
    pub fn grab_size(&self) -> i32 {
        self.border_thickness * 2
    }

    /// Whether edge resizing is enabled.
    pub fn is_resize_enabled(&self) -> bool {
        self.resize_enabled
    }

    /// Classify `point` (window-local) for a window of `window_size`.
    ///
    /// Resize zones take priority over the caption.
    pub fn hit_test(&self, point: Point, window_size: Size) -> ChromeHitTestResult {
        if self.resize_enabled
            && let Some(direction) = self.resize_direction_at(point, window_size)
        {
            return ChromeHitTestResult::ResizeBorder(direction);
        }

        if self.title_bar_height > 0
            && point.y >= 0
            && point.y < self.title_bar_height
            && point.x >= 0
            && point.x < window_size.width
        {
            return ChromeHitTestResult::Caption;
        }

        ChromeHitTestResult::Client
    }

    /// The resize direction for `point`, if it lies in a grab zone.
    pub fn resize_direction_at(&self, point: Point, window_size: Size) -> Option<ResizeDirection> {
        let grab = self.grab_size();
        if grab <= 0 {
            return None;
        }

        let Point { x, y } = point;
        let Size { width, height } = window_size;

        let left = x < grab;
        let right = x >= width - grab;
        let top = y < grab;
        let bottom = y >= height - grab;

        let direction = match (left, right, top, bottom) {
            (true, _, true, _) => ResizeDirection::NorthWest,
            (_, true, true, _) => ResizeDirection::NorthEast,
            (true, _, _, true) => ResizeDirection::SouthWest,
            (_, true, _, true) => ResizeDirection::SouthEast,
            (_, _, true, _) => ResizeDirection::North,
            (_, _, _, true) => ResizeDirection::South,
            (true, _, _, _) => ResizeDirection::West,
            (_, true, _, _) => ResizeDirection::East,
            _ => return None,
        };
        Some(direction)
    }
}

/// The pointer shape shown over a resize grab zone.
pub fn cursor_for_direction(direction: ResizeDirection) -> CursorIcon {
    match direction {
        ResizeDirection::North => CursorIcon::NResize,
        ResizeDirection::South => CursorIcon::SResize,
        ResizeDirection::East => CursorIcon::EResize,
        ResizeDirection::West => CursorIcon::WResize,
        ResizeDirection::NorthEast => CursorIcon::NeResize,
        ResizeDirection::NorthWest => CursorIcon::NwResize,
        ResizeDirection::SouthEast => CursorIcon::SeResize,
        ResizeDirection::SouthWest => CursorIcon::SwResize,
    }
}

/// Whether resizing in `direction` moves the left edge.
pub fn moves_west_edge(direction: ResizeDirection) -> bool {
    matches!(
        direction,
        ResizeDirection::West | ResizeDirection::NorthWest | ResizeDirection::SouthWest
    )
}

/// Whether resizing in `direction` moves the right edge.
pub fn moves_east_edge(direction: ResizeDirection) -> bool {
    matches!(
        direction,
        ResizeDirection::East | ResizeDirection::NorthEast | ResizeDirection::SouthEast
    )
}

/// Whether resizing in `direction` moves the top edge.
pub fn moves_north_edge(direction: ResizeDirection) -> bool {
    matches!(
        direction,
        ResizeDirection::North | ResizeDirection::NorthWest | ResizeDirection::NorthEast
    )
}

/// Whether resizing in `direction` moves the bottom edge.
pub fn moves_south_edge(direction: ResizeDirection) -> bool {
    matches!(
        direction,
        ResizeDirection::South | ResizeDirection::SouthWest | ResizeDirection::SouthEast
    )
}
