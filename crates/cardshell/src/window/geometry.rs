//! Window geometry in physical screen pixels.
//!
//! [`WindowLayout`] is the persisted form of a window: its normal bounds
//! plus the maximized and fullscreen flags. Restoring a layout goes through
//! [`WindowLayout::validated`] so a window saved on a monitor that is no
//! longer attached still comes back on screen.

use serde::{Deserialize, Serialize};

/// A position in screen or window-local pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Size {
    /// Create a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle from an origin and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Same size, moved to `origin`.
    pub const fn with_origin(self, origin: Point) -> Self {
        Self::new(origin.x, origin.y, self.width, self.height)
    }

    /// Same origin, resized to `size`.
    pub const fn with_size(self, size: Size) -> Self {
        Self::new(self.x, self.y, size.width, size.height)
    }

    /// Right edge (exclusive).
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether `point` lies inside.
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Whether the two rectangles share any area.
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Persisted window placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowLayout {
    /// Normal-bounds left edge.
    pub x: i32,
    /// Normal-bounds top edge.
    pub y: i32,
    /// Normal-bounds width.
    pub width: i32,
    /// Normal-bounds height.
    pub height: i32,
    /// Whether the window was maximized.
    #[serde(default)]
    pub maximized: bool,
    /// Whether the window was fullscreen.
    #[serde(default)]
    pub fullscreen: bool,
}

impl WindowLayout {
    /// Smallest width or height a restored window gets.
    pub const MIN_SIZE: i32 = 100;
    /// Pixels of the window that must stay on the work area.
    pub const MIN_VISIBLE: i32 = 50;

    /// Layout for a normal window.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            maximized: false,
            fullscreen: false,
        }
    }

    /// Set the maximized flag.
    pub const fn with_maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    /// Set the fullscreen flag.
    pub const fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// The normal bounds.
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Fit the layout onto `work_area`.
    ///
    /// The size is clamped to the work area (but never below
    /// [`Self::MIN_SIZE`]), and the origin is moved so at least
    /// [`Self::MIN_VISIBLE`] pixels remain reachable. The top edge is kept
    /// on screen so the title bar can be grabbed.
    pub fn validated(&self, work_area: Rect) -> Self {
        let mut adjusted = *self;

        adjusted.width = adjusted
            .width
            .max(Self::MIN_SIZE)
            .min(work_area.width.max(Self::MIN_SIZE));
        adjusted.height = adjusted
            .height
            .max(Self::MIN_SIZE)
            .min(work_area.height.max(Self::MIN_SIZE));

        let max_x = work_area.right() - Self::MIN_VISIBLE;
        let min_x = work_area.x - adjusted.width + Self::MIN_VISIBLE;
        adjusted.x = adjusted.x.clamp(min_x.min(max_x), max_x);

        let max_y = work_area.bottom() - Self::MIN_VISIBLE;
        adjusted.y = adjusted.y.clamp(work_area.y.min(max_y), max_y);

        adjusted
    }

    /// Whether any part of the normal bounds overlaps `area`.
    pub fn is_visible_on(&self, area: &Rect) -> bool {
        self.bounds().intersects(area)
    }
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self::new(100, 100, 1280, 800)
    }
}
