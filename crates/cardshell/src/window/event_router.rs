//! Routing winit window events into a [`WindowChrome`].
//!
//! The application keeps one [`ChromeEventRouter`] per window next to its
//! chrome and forwards events from its `ApplicationHandler`:
//!
//! ```ignore
//! fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
//!     self.router.handle_window_event(&mut self.chrome, &event, Instant::now());
//! }
//!
//! fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
//!     match self.router.about_to_wait(&mut self.chrome, Instant::now()) {
//!         Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
//!         None => event_loop.set_control_flow(ControlFlow::Wait),
//!     }
//! }
//! ```
//!
//! Focus changes are resolved at `about_to_wait`: when a window loses
//! focus, another window of the app may gain it in the same batch of
//! events, and only then is it known whether focus left the application.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};

use cardshell_core::logging::targets;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::window::WindowId;

use super::chrome::{FocusTarget, WindowChrome};
use super::fullscreen::NativeFullscreenEvent;
use super::geometry::Point;
use super::host::{TitleBar, WindowHost};

/// Maximum time between clicks of a double click.
pub const DEFAULT_DOUBLE_CLICK_TIME_MS: u64 = 500;

/// Maximum pointer travel between clicks of a double click, in pixels.
pub const DEFAULT_DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// Which windows of the application currently have focus.
///
/// Shared by the routers of all windows.
#[derive(Debug, Default)]
pub struct FocusTracker {
    focused: RefCell<HashSet<WindowId>>,
}

impl FocusTracker {
    /// Tracker with no focused window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a focus change for `window`.
    pub fn set_focused(&self, window: WindowId, focused: bool) {
        let mut set = self.focused.borrow_mut();
        if focused {
            set.insert(window);
        } else {
            set.remove(&window);
        }
    }

    /// Whether any window of the app has focus.
    pub fn app_has_focus(&self) -> bool {
        !self.focused.borrow().is_empty()
    }
}

/// Counts consecutive clicks at the same spot.
#[derive(Debug, Clone)]
pub struct ClickCounter {
    time: Duration,
    distance: f64,
    last: Option<(Instant, Point)>,
    count: u32,
}

impl Default for ClickCounter {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_DOUBLE_CLICK_TIME_MS),
            DEFAULT_DOUBLE_CLICK_DISTANCE,
        )
    }
}

impl ClickCounter {
    /// Counter with custom thresholds.
    pub fn new(time: Duration, distance: f64) -> Self {
        Self {
            time,
            distance,
            last: None,
            count: 0,
        }
    }

    /// Register a press at `position`, returning the click count.
    pub fn register(&mut self, now: Instant, position: Point) -> u32 {
        let continues = self.last.is_some_and(|(at, last)| {
            let dx = f64::from(position.x - last.x);
            let dy = f64::from(position.y - last.y);
            now.saturating_duration_since(at) <= self.time
                && (dx * dx + dy * dy).sqrt() <= self.distance
        });

        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some((now, position));
        self.count
    }

    /// Forget the previous click.
    pub fn reset(&mut self) {
        self.last = None;
        self.count = 0;
    }
}

/// Translates winit events for one window into chrome calls.
pub struct ChromeEventRouter {
    window_id: WindowId,
    focus: Rc<FocusTracker>,
    clicks: ClickCounter,
    pointer: Option<Point>,
    button_down: bool,
    focus_lost: bool,
}

impl ChromeEventRouter {
    /// Router for `window_id`, sharing `focus` with the app's other windows.
    pub fn new(window_id: WindowId, focus: Rc<FocusTracker>) -> Self {
        Self {
            window_id,
            focus,
            clicks: ClickCounter::default(),
            pointer: None,
            button_down: false,
            focus_lost: false,
        }
    }

    /// Replace the double-click thresholds.
    pub fn with_click_counter(mut self, clicks: ClickCounter) -> Self {
        self.clicks = clicks;
        self
    }

    /// The window this router serves.
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    /// Forward one event to `chrome`.
    pub fn handle_window_event<H: WindowHost, T: TitleBar>(
        &mut self,
        chrome: &mut WindowChrome<H, T>,
        event: &WindowEvent,
        now: Instant,
    ) {
        match event {
            WindowEvent::Moved(_) => {
                let bounds = chrome.host().bounds();
                chrome.on_host_moved(bounds, now);
            }
            WindowEvent::Resized(_) => {
                self.sync_native_fullscreen(chrome);
                self.sync_host_state(chrome);
                let bounds = chrome.host().bounds();
                chrome.on_host_resized(bounds, now);
            }
            WindowEvent::Occluded(_) => self.sync_host_state(chrome),
            WindowEvent::Focused(focused) => {
                self.focus.set_focused(self.window_id, *focused);
                if *focused {
                    self.focus_lost = false;
                    chrome.on_activated();
                } else {
                    self.focus_lost = true;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let local = Point::new(position.x.round() as i32, position.y.round() as i32);
                self.pointer = Some(local);
                if self.button_down {
                    chrome.pointer_dragged(to_screen(chrome, local));
                } else {
                    chrome.pointer_moved(local);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if !self.button_down {
                    self.pointer = None;
                    chrome.pointer_left();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(chrome, *state, *button, now);
            }
            _ => {}
        }
    }

    fn handle_mouse_input<H: WindowHost, T: TitleBar>(
        &mut self,
        chrome: &mut WindowChrome<H, T>,
        state: ElementState,
        button: MouseButton,
        now: Instant,
    ) {
        if state == ElementState::Released {
            if button == MouseButton::Left {
                self.button_down = false;
                chrome.pointer_released();
            }
            return;
        }

        let Some(local) = self.pointer else {
            return;
        };
        let count = if button == MouseButton::Left {
            self.button_down = true;
            self.clicks.register(now, local)
        } else {
            1
        };
        chrome.pointer_pressed(button, local, to_screen(chrome, local), count);
    }

    /// Resolve pending focus loss and run timed chrome work.
    ///
    /// Returns the chrome's next deadline for `ControlFlow::WaitUntil`.
    pub fn about_to_wait<H: WindowHost, T: TitleBar>(
        &mut self,
        chrome: &mut WindowChrome<H, T>,
        now: Instant,
    ) -> Option<Instant> {
        if std::mem::take(&mut self.focus_lost) {
            let target = if self.focus.app_has_focus() {
                FocusTarget::SameApp
            } else {
                FocusTarget::External
            };
            tracing::trace!(target: targets::WINDOW, ?target, "focus lost");
            chrome.on_deactivated(target);
        }

        chrome.poll(now);
        chrome.next_deadline()
    }

    // With native rules the window manager flips fullscreen on its own;
    // the resulting resize is the first place that shows up.
    fn sync_native_fullscreen<H: WindowHost, T: TitleBar>(&self, chrome: &mut WindowChrome<H, T>) {
        if !chrome.uses_native_fullscreen_rules() {
            return;
        }
        let host_fullscreen = chrome.host().is_fullscreen();
        if host_fullscreen != chrome.is_fullscreen() {
            chrome.on_native_fullscreen(if host_fullscreen {
                NativeFullscreenEvent::Entering
            } else {
                NativeFullscreenEvent::Exiting
            });
        }
    }

    fn sync_host_state<H: WindowHost, T: TitleBar>(&self, chrome: &mut WindowChrome<H, T>) {
        let (Some(minimized), Some(maximized)) =
            (chrome.host().is_minimized(), chrome.host().is_maximized())
        else {
            return;
        };
        if minimized != chrome.is_minimized() || (!minimized && maximized != chrome.is_maximized()) {
            chrome.on_host_state_changed(minimized, maximized);
        }
    }
}

fn to_screen<H: WindowHost, T: TitleBar>(chrome: &WindowChrome<H, T>, local: Point) -> Point {
    let origin = chrome.host().bounds().origin();
    Point::new(origin.x + local.x, origin.y + local.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_within_thresholds() {
        let mut clicks = ClickCounter::default();
        let start = Instant::now();
        assert_eq!(clicks.register(start, Point::new(10, 10)), 1);
        assert_eq!(clicks.register(start + Duration::from_millis(200), Point::new(12, 13)), 2);
        assert_eq!(clicks.register(start + Duration::from_millis(400), Point::new(12, 13)), 3);
    }

    #[test]
    fn test_slow_click_restarts_count() {
        let mut clicks = ClickCounter::default();
        let start = Instant::now();
        clicks.register(start, Point::new(10, 10));
        assert_eq!(clicks.register(start + Duration::from_millis(501), Point::new(10, 10)), 1);
    }

    #[test]
    fn test_distant_click_restarts_count() {
        let mut clicks = ClickCounter::default();
        let start = Instant::now();
        clicks.register(start, Point::new(10, 10));
        assert_eq!(clicks.register(start + Duration::from_millis(50), Point::new(16, 10)), 1);
    }

    #[test]
    fn test_reset() {
        let mut clicks = ClickCounter::new(Duration::from_secs(1), 3.0);
        let start = Instant::now();
        clicks.register(start, Point::new(0, 0));
        clicks.reset();
        assert_eq!(clicks.register(start, Point::new(0, 0)), 1);
    }

    #[test]
    fn test_focus_tracker() {
        let tracker = FocusTracker::new();
        let id = WindowId::dummy();
        assert!(!tracker.app_has_focus());
        tracker.set_focused(id, true);
        assert!(tracker.app_has_focus());
        tracker.set_focused(id, false);
        assert!(!tracker.app_has_focus());
    }
}
