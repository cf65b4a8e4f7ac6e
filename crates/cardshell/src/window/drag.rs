//! Pointer drag sessions for moving and resizing the frameless window.
//!
//! Both sessions work in screen coordinates: the pointer position at press
//! time is the anchor, and every drag event is turned into new window
//! bounds from the delta to that anchor.

use super::frameless_chrome::{
    ResizeDirection, moves_east_edge, moves_north_edge, moves_south_edge, moves_west_edge,
};
use super::geometry::{Point, Rect, Size};

/// Squared pointer travel required before a maximized window starts moving.
pub const MAXIMIZED_DRAG_THRESHOLD_SQ: i32 = 25;

/// An edge or corner resize in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    direction: ResizeDirection,
    start_bounds: Rect,
    anchor: Point,
}

impl ResizeSession {
    /// Start resizing `start_bounds` in `direction` from screen point `anchor`.
    pub fn new(direction: ResizeDirection, start_bounds: Rect, anchor: Point) -> Self {
        Self {
            direction,
            start_bounds,
            anchor,
        }
    }

    /// The direction being resized.
    pub fn direction(&self) -> ResizeDirection {
        self.direction
    }

    /// Window bounds at press time.
    pub fn start_bounds(&self) -> Rect {
        self.start_bounds
    }

    /// Bounds for the pointer at screen point `pointer`.
    ///
    /// The size is clamped to `min` and, when given, `max`. The edge
    /// opposite the dragged one stays where it was at press time.
    pub fn bounds_for(&self, pointer: Point, min: Size, max: Option<Size>) -> Rect {
        let dx = pointer.x - self.anchor.x;
        let dy = pointer.y - self.anchor.y;
        let start = self.start_bounds;

        let mut width = start.width;
        let mut height = start.height;
        if moves_west_edge(self.direction) {
            width -= dx;
        } else if moves_east_edge(self.direction) {
            width += dx;
        }
        if moves_north_edge(self.direction) {
            height -= dy;
        } else if moves_south_edge(self.direction) {
            height += dy;
        }

        width = clamp_extent(width, min.width, max.map(|m| m.width));
        height = clamp_extent(height, min.height, max.map(|m| m.height));

        let x = if moves_west_edge(self.direction) {
            start.x + (start.width - width)
        } else {
            start.x
        };
        let y = if moves_north_edge(self.direction) {
            start.y + (start.height - height)
        } else {
            start.y
        };

        Rect::new(x, y, width, height)
    }
}

fn clamp_extent(value: i32, min: i32, max: Option<i32>) -> i32 {
    let value = value.max(min);
    match max {
        Some(max) if max > 0 => value.min(max.max(min)),
        _ => value,
    }
}

/// A title bar drag in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSession {
    start_location: Point,
    anchor: Point,
}

impl MoveSession {
    /// Start moving a window located at `start_location` from screen point `anchor`.
    pub fn new(start_location: Point, anchor: Point) -> Self {
        Self {
            start_location,
            anchor,
        }
    }

    /// Window location at press time.
    pub fn start_location(&self) -> Point {
        self.start_location
    }

    /// New window location for the pointer at `pointer`.
    ///
    /// Returns `None` while a maximized window has not yet been dragged
    /// past the threshold, so a sloppy click does not restore it.
    pub fn location_for(&self, pointer: Point, maximized: bool) -> Option<Point> {
        let dx = pointer.x - self.anchor.x;
        let dy = pointer.y - self.anchor.y;
        if maximized && dx * dx + dy * dy < MAXIMIZED_DRAG_THRESHOLD_SQ {
            return None;
        }
        Some(Point::new(
            self.start_location.x + dx,
            self.start_location.y + dy,
        ))
    }
}
