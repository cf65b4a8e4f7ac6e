//! The frameless window state machine.
//!
//! [`WindowChrome`] owns everything the window manager would normally do
//! for a decorated window: remembering the normal bounds across maximize
//! and fullscreen, hiding the border and title bar when they would be in
//! the way, edge resizing and title bar dragging, and pausing the app when
//! the main window goes to the background.
//!
//! It is driven from three directions:
//!
//! - the application calls the `set_*` operations,
//! - the event router forwards pointer input and host notifications,
//! - the event loop calls [`WindowChrome::poll`] when
//!   [`WindowChrome::next_deadline`] passes.
//!
//! All of it runs on the UI thread.

use std::rc::Rc;
use std::time::{Duration, Instant};

use cardshell_core::debounce::earliest;
use cardshell_core::logging::{span_names, targets};
use cardshell_core::{Debouncer, Os, ThreadAffinity};
use cursor_icon::CursorIcon;
use winit::event::MouseButton;

use super::drag::{MoveSession, ResizeSession};
use super::frameless_chrome::{
    ChromeHitTestResult, DEFAULT_BORDER_THICKNESS, DEFAULT_TITLE_BAR_HEIGHT, FramelessWindowChrome,
    ResizeDirection, cursor_for_direction,
};
use super::fullscreen::{NativeFullscreenEvent, PlatformFullscreenController};
use super::geometry::{Point, Rect, Size, WindowLayout};
use super::host::{TitleBar, WindowHost};
use super::icon::WindowIcon;
use super::state::WindowState;
use crate::context::{SharedPreferences, ShellContext};
use crate::error::Result;
use crate::pause::PauseHook;

/// Default quiet period before the chrome refreshes after a move or resize.
pub const DEFAULT_DEBOUNCE_INTERVAL: Duration = Duration::from_millis(750);

/// Default delay before replaying a fullscreen request made while hidden.
pub const DEFAULT_PENDING_FULLSCREEN_DELAY: Duration = Duration::from_millis(100);

/// Per-window chrome settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeConfig {
    main_window: bool,
    border_thickness: i32,
    title_bar_height: i32,
    debounce_interval: Duration,
    pending_fullscreen_delay: Duration,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            main_window: false,
            border_thickness: DEFAULT_BORDER_THICKNESS,
            title_bar_height: DEFAULT_TITLE_BAR_HEIGHT,
            debounce_interval: DEFAULT_DEBOUNCE_INTERVAL,
            pending_fullscreen_delay: DEFAULT_PENDING_FULLSCREEN_DELAY,
        }
    }
}

impl ChromeConfig {
    /// Settings for a secondary window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings for the application's main window.
    pub fn main() -> Self {
        Self::default().with_main_window(true)
    }

    /// Mark this as the main window.
    ///
    /// Only the main window persists preferences, relayouts on title bar
    /// changes and pauses the app when deactivated.
    pub fn with_main_window(mut self, main: bool) -> Self {
        self.main_window = main;
        self
    }

    /// Set the border thickness.
    pub fn with_border_thickness(mut self, thickness: i32) -> Self {
        self.border_thickness = thickness.max(0);
        self
    }

    /// Set the title bar height.
    pub fn with_title_bar_height(mut self, height: i32) -> Self {
        self.title_bar_height = height.max(0);
        self
    }

    /// Set the quiet period for the trailing refresh.
    pub fn with_debounce_interval(mut self, interval: Duration) -> Self {
        self.debounce_interval = interval;
        self
    }

    /// Set the delay for replaying deferred fullscreen requests.
    pub fn with_pending_fullscreen_delay(mut self, delay: Duration) -> Self {
        self.pending_fullscreen_delay = delay;
        self
    }

    /// Whether this is the main window.
    pub fn is_main_window(&self) -> bool {
        self.main_window
    }

    /// Border thickness.
    pub fn border_thickness(&self) -> i32 {
        self.border_thickness
    }

    /// Title bar height.
    pub fn title_bar_height(&self) -> i32 {
        self.title_bar_height
    }

    /// Trailing refresh interval.
    pub fn debounce_interval(&self) -> Duration {
        self.debounce_interval
    }

    /// Deferred fullscreen delay.
    pub fn pending_fullscreen_delay(&self) -> Duration {
        self.pending_fullscreen_delay
    }
}

/// Where focus went when the window was deactivated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Another application.
    External,
    /// Another window of this application.
    SameApp,
}

/// State machine for one frameless window.
pub struct WindowChrome<H: WindowHost, T: TitleBar> {
    host: H,
    title_bar: T,
    os: Os,
    preferences: SharedPreferences,
    pause_hook: Rc<PauseHook>,
    fullscreen: PlatformFullscreenController,
    config: ChromeConfig,
    hit_test: FramelessWindowChrome,

    state: WindowState,
    normal_bounds: Option<Rect>,
    pre_minimize_state: WindowState,
    hide_border: bool,
    hide_title_bar: bool,
    lock_title_bar: bool,
    title: String,
    icon: Option<WindowIcon>,

    refresh: Debouncer,
    cursor: CursorIcon,
    hover: Option<ResizeDirection>,
    resize: Option<ResizeSession>,
    drag: Option<MoveSession>,
    affinity: ThreadAffinity,
}

impl<H: WindowHost, T: TitleBar> WindowChrome<H, T> {
    /// Build the chrome for a window and show its border and title bar.
    pub fn new(host: H, title_bar: T, context: ShellContext, config: ChromeConfig) -> Self {
        let (os, preferences, pause_hook, fullscreen) = context.into_parts();
        let lock_title_bar = config.main_window && preferences.borrow().lock_title_bar();
        let hit_test = FramelessWindowChrome::new()
            .with_border_thickness(config.border_thickness)
            .with_title_bar_height(config.title_bar_height);

        let mut chrome = Self {
            host,
            title_bar,
            os,
            preferences,
            pause_hook,
            fullscreen,
            config,
            hit_test,
            state: WindowState::NORMAL,
            normal_bounds: None,
            pre_minimize_state: WindowState::NORMAL,
            // Start hidden so the first refresh shows both.
            hide_border: true,
            hide_title_bar: true,
            lock_title_bar,
            title: String::new(),
            icon: None,
            refresh: Debouncer::new(config.debounce_interval),
            cursor: CursorIcon::Default,
            hover: None,
            resize: None,
            drag: None,
            affinity: ThreadAffinity::current(),
        };
        chrome.refresh_chrome();
        chrome
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The native window.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The drawn title bar.
    pub fn title_bar(&self) -> &T {
        &self.title_bar
    }

    /// Detected OS.
    pub fn os(&self) -> Os {
        self.os
    }

    /// Window settings.
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    /// Hit testing metrics.
    pub fn hit_test(&self) -> &FramelessWindowChrome {
        &self.hit_test
    }

    /// Current state.
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Whether minimized.
    pub fn is_minimized(&self) -> bool {
        self.state.is_minimized()
    }

    /// Whether maximized.
    pub fn is_maximized(&self) -> bool {
        self.state.is_maximized()
    }

    /// Whether fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.state.is_fullscreen()
    }

    /// Whether neither minimized, maximized nor fullscreen.
    pub fn is_normal(&self) -> bool {
        self.state.is_normal()
    }

    /// Whether macOS fullscreen rules apply to this window.
    pub fn uses_native_fullscreen_rules(&self) -> bool {
        self.fullscreen.uses_native_rules()
    }

    /// The fullscreen strategy in use.
    pub fn fullscreen_controller(&self) -> &PlatformFullscreenController {
        &self.fullscreen
    }

    /// Window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Window icon, if one was set.
    pub fn icon(&self) -> Option<&WindowIcon> {
        self.icon.as_ref()
    }

    /// Whether the border is currently hidden.
    pub fn is_border_hidden(&self) -> bool {
        self.hide_border
    }

    /// Whether the title bar is currently hidden.
    pub fn is_title_bar_hidden(&self) -> bool {
        self.hide_title_bar
    }

    /// Whether the title bar stays visible in fullscreen.
    pub fn lock_title_bar(&self) -> bool {
        self.lock_title_bar
    }

    /// Pointer shape last requested from the host.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Resize zone under the pointer, if any.
    pub fn hover_direction(&self) -> Option<ResizeDirection> {
        self.hover
    }

    /// Whether an edge resize is in progress.
    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Whether a title bar drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // =========================================================================
    // State changes
    // =========================================================================

    /// Minimize or restore the window.
    ///
    /// Restoring brings back the maximized and fullscreen flags the window
    /// had when it was minimized.
    pub fn set_minimized(&mut self, minimized: bool) {
        if minimized == self.state.is_minimized() {
            return;
        }

        if minimized {
            if self.state.is_fullscreen() && self.uses_native_fullscreen_rules() {
                tracing::debug!(target: targets::WINDOW, "native fullscreen windows cannot be minimized");
                return;
            }
            self.pre_minimize_state = self.state;
            if self.state.is_fullscreen() {
                self.set_fullscreen(false);
            }
            self.host.set_minimized(true);
            self.state = self.state.with_minimized(true);
            tracing::debug!(target: targets::WINDOW, snapshot = ?self.pre_minimize_state, "minimized");
        } else {
            self.host.set_minimized(false);
            self.state = self.state.with_minimized(false);
            self.restore_snapshot();
            tracing::debug!(target: targets::WINDOW, state = ?self.state, "restored from minimized");
        }

        self.refresh_chrome();
    }

    /// Maximize or restore the window.
    pub fn set_maximized(&mut self, maximized: bool) {
        if maximized == self.state.is_maximized() {
            return;
        }

        if maximized {
            self.update_normal_bounds();
            if self.os.is_windows() {
                // Keep the undecorated window off the taskbar.
                self.host.set_maximized_bounds_hint(Some(self.host.work_area()));
            }
            self.host.set_maximized(true);
            self.state = self.state.with_maximized(true);
        } else {
            self.host.set_maximized(false);
            self.state = self.state.with_maximized(false);
            if !self.state.is_fullscreen() {
                self.apply_normal_bounds();
            }
        }

        tracing::debug!(target: targets::WINDOW, maximized, "maximized changed");
        self.refresh_chrome();
    }

    /// Enter or leave fullscreen.
    ///
    /// With native rules the change happens later, when the window manager
    /// reports it through [`on_native_fullscreen`](Self::on_native_fullscreen).
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen.uses_native_rules() {
            self.request_native_fullscreen(fullscreen);
        } else {
            self.set_generic_fullscreen(fullscreen);
        }
    }

    fn set_generic_fullscreen(&mut self, fullscreen: bool) {
        let host_was_fullscreen = self.host.is_fullscreen();
        if fullscreen == host_was_fullscreen && fullscreen == self.state.is_fullscreen() {
            return;
        }

        let was_maximized = self.state.is_maximized();
        if fullscreen {
            self.update_normal_bounds();
            if self.state.is_minimized() {
                self.host.set_minimized(false);
            }
        }

        self.host.set_fullscreen(fullscreen);
        let host_fullscreen = self.host.is_fullscreen();
        self.state = self.state.with_fullscreen(host_fullscreen);

        if host_fullscreen != host_was_fullscreen {
            if was_maximized {
                self.host.set_maximized(true);
            } else if !host_fullscreen {
                self.apply_normal_bounds();
            }
        }

        tracing::debug!(
            target: targets::FULLSCREEN,
            requested = fullscreen,
            fullscreen = host_fullscreen,
            "generic fullscreen changed"
        );
        self.refresh_chrome();
    }

    fn request_native_fullscreen(&mut self, fullscreen: bool) {
        let visible = self.host.is_visible();
        let normal = self.state.is_normal();
        let bounds = self.host.bounds();
        let Some(native) = self.fullscreen.native_mut() else {
            return;
        };

        if !visible {
            native.defer(fullscreen);
            return;
        }
        if native.request(fullscreen) && fullscreen && normal {
            self.normal_bounds = Some(bounds);
        }
    }

    /// Apply a native fullscreen transition reported by the window manager.
    pub fn on_native_fullscreen(&mut self, event: NativeFullscreenEvent) {
        let current = self.host.bounds();
        let display = self.host.display_bounds();
        let Some(native) = self.fullscreen.native_mut() else {
            tracing::warn!(target: targets::FULLSCREEN, ?event, "native fullscreen event without native support");
            return;
        };

        let entering = event == NativeFullscreenEvent::Entering;
        if entering == native.is_fullscreen() {
            return;
        }

        if entering {
            native.entering(current);
            self.state = self.state.with_fullscreen(true);
            self.host.set_bounds(display);
        } else {
            let saved = native.exiting();
            self.state = self.state.with_fullscreen(false);
            if let Some(bounds) = saved.or(self.normal_bounds) {
                self.host.set_bounds(bounds);
            }
        }

        tracing::debug!(target: targets::FULLSCREEN, ?event, "native fullscreen transition");
        self.refresh_chrome();
    }

    fn restore_snapshot(&mut self) {
        let snapshot = self.pre_minimize_state;
        if snapshot.is_maximized() {
            // Some window managers forget maximized across a minimize.
            self.host.set_maximized(true);
            self.state = self.state.with_maximized(true);
        }
        if snapshot.is_fullscreen() && !self.state.is_fullscreen() {
            self.set_fullscreen(true);
        }
    }

    /// Leave minimized, maximized and fullscreen.
    fn reset_state(&mut self) {
        if self.state.is_minimized() {
            self.host.set_minimized(false);
            self.state = self.state.with_minimized(false);
        }
        self.set_maximized(false);
        self.set_fullscreen(false);
    }

    // =========================================================================
    // Bounds and layout
    // =========================================================================

    /// Last known bounds while neither maximized nor fullscreen.
    pub fn normal_bounds(&self) -> Option<Rect> {
        self.normal_bounds
    }

    /// Store the normal bounds, applying them if the window is normal.
    pub fn set_normal_bounds(&mut self, bounds: Rect) {
        self.normal_bounds = Some(bounds);
        if !self.state.is_maximized() && !self.state.is_fullscreen() {
            self.host.set_bounds(bounds);
        }
    }

    /// Record the host's current bounds as the normal bounds.
    ///
    /// Does nothing unless the window is normal.
    pub fn update_normal_bounds(&mut self) {
        if self.state.is_normal() {
            self.normal_bounds = Some(self.host.bounds());
        }
    }

    /// Move the host back to the stored normal bounds.
    pub fn apply_normal_bounds(&mut self) {
        if let Some(bounds) = self.normal_bounds {
            self.host.set_bounds(bounds);
        }
    }

    /// Restore a window from saved values.
    ///
    /// Normal bounds go first so leaving maximized or fullscreen later
    /// lands on them.
    pub fn set_window_layout(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        maximized: bool,
        fullscreen: bool,
    ) {
        let _span = tracing::debug_span!(target: targets::WINDOW, span_names::APPLY_LAYOUT).entered();
        self.set_normal_bounds(Rect::new(x, y, width, height));
        self.set_maximized(maximized);
        self.set_fullscreen(fullscreen);
    }

    /// Apply a persisted layout after fitting it onto the current work area.
    pub fn restore_layout(&mut self, layout: WindowLayout) {
        let layout = layout.validated(self.host.work_area());
        self.set_window_layout(
            layout.x,
            layout.y,
            layout.width,
            layout.height,
            layout.maximized,
            layout.fullscreen,
        );
    }

    /// The layout to persist for this window.
    pub fn window_layout(&self) -> WindowLayout {
        let bounds = self.normal_bounds.unwrap_or_else(|| self.host.bounds());
        WindowLayout::new(bounds.x, bounds.y, bounds.width, bounds.height)
            .with_maximized(self.state.is_maximized())
            .with_fullscreen(self.state.is_fullscreen())
    }

    /// Persist the main window's layout. Other windows do nothing.
    pub fn save_layout(&self) -> Result<()> {
        if !self.config.main_window {
            return Ok(());
        }
        self.preferences
            .borrow_mut()
            .set_window_layout(self.window_layout());
        self.preferences.borrow().save()
    }

    /// Move the window, leaving maximized and fullscreen first.
    ///
    /// A native fullscreen exit is asynchronous, so the normal bounds are
    /// only recorded once the window is actually normal.
    pub fn set_location(&mut self, location: Point) {
        self.reset_state();
        self.host.set_location(location);
        self.update_normal_bounds();
    }

    /// Resize the window, leaving maximized and fullscreen first.
    pub fn set_size(&mut self, size: Size) {
        self.reset_state();
        self.host.set_size(size);
        self.update_normal_bounds();
    }

    // =========================================================================
    // Title bar and border
    // =========================================================================

    /// Set the window title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.host.set_title(title);
        self.title_bar.set_title(title);
    }

    /// Set or clear the window icon, on the window and the drawn title bar.
    pub fn set_icon(&mut self, icon: Option<WindowIcon>) {
        self.host.set_icon(icon.as_ref());
        self.title_bar.set_icon(icon.as_ref());
        self.icon = icon;
    }

    /// Keep the title bar visible in fullscreen.
    ///
    /// The main window stores the choice in the preferences.
    pub fn set_lock_title_bar(&mut self, locked: bool) {
        if locked == self.lock_title_bar {
            return;
        }
        self.lock_title_bar = locked;

        if self.config.main_window {
            self.preferences.borrow_mut().set_lock_title_bar(locked);
            if let Err(err) = self.preferences.borrow().save() {
                tracing::warn!(target: targets::PREFS, error = %err, "failed to save title bar lock");
            }
        }

        self.update_title_bar();
    }

    fn refresh_chrome(&mut self) {
        self.update_border();
        self.update_title_bar();
    }

    fn update_border(&mut self) {
        if self.state.is_minimized() {
            return;
        }

        let hide = self.state.is_maximized() || self.state.is_fullscreen();
        self.hit_test.set_resize_enabled(!hide);
        if hide == self.hide_border {
            return;
        }

        self.hide_border = hide;
        self.host.set_border_visible(!hide);
        self.host.request_relayout();
        tracing::trace!(target: targets::CHROME, hidden = hide, "border visibility changed");
    }

    fn update_title_bar(&mut self) {
        self.title_bar.update_buttons(self.state);

        let hide = !self.uses_native_fullscreen_rules()
            && self.state.is_fullscreen()
            && !self.lock_title_bar;
        if hide == self.hide_title_bar {
            return;
        }

        self.hide_title_bar = hide;
        self.title_bar.set_visible(!hide);
        self.hit_test
            .set_title_bar_height(if hide { 0 } else { self.config.title_bar_height });
        if self.config.main_window {
            self.host.request_relayout();
        }
        tracing::trace!(target: targets::CHROME, hidden = hide, "title bar visibility changed");
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    fn set_cursor(&mut self, cursor: CursorIcon) {
        if cursor != self.cursor {
            self.cursor = cursor;
            self.host.set_cursor(cursor);
        }
    }

    /// The pointer moved to window-local `local` with no button held.
    pub fn pointer_moved(&mut self, local: Point) {
        if self.resize.is_some() || self.drag.is_some() {
            return;
        }
        if self.state.is_maximized() || self.state.is_fullscreen() {
            self.hover = None;
            return;
        }

        let size = self.host.bounds().size();
        self.hover = self.hit_test.resize_direction_at(local, size);
        let cursor = self.hover.map_or(CursorIcon::Default, cursor_for_direction);
        self.set_cursor(cursor);
    }

    /// A button was pressed at window-local `local`, screen `screen`.
    ///
    /// `click_count` is 2 for a double click. Any repeated click toggles
    /// maximized.
    pub fn pointer_pressed(&mut self, button: MouseButton, local: Point, screen: Point, click_count: u32) {
        if button != MouseButton::Left {
            return;
        }

        if let Some(direction) = self.hover {
            self.resize = Some(ResizeSession::new(direction, self.host.bounds(), screen));
            tracing::trace!(target: targets::CHROME, ?direction, "resize started");
            return;
        }

        let size = self.host.bounds().size();
        if self.hit_test.hit_test(local, size) != ChromeHitTestResult::Caption
            || self.state.is_fullscreen()
        {
            return;
        }

        match click_count {
            1 => {
                self.drag = Some(MoveSession::new(self.host.bounds().origin(), screen));
            }
            _ => {
                self.drag = None;
                let maximized = self.state.is_maximized();
                self.set_maximized(!maximized);
            }
        }
    }

    /// The pointer moved to screen point `screen` with the left button held.
    pub fn pointer_dragged(&mut self, screen: Point) {
        if let Some(session) = self.resize {
            let bounds = session.bounds_for(screen, self.host.min_size(), self.host.max_size());
            self.host.set_bounds(bounds);
            if self.state.is_normal() {
                self.normal_bounds = Some(bounds);
            }
        } else if let Some(session) = self.drag
            && let Some(location) = session.location_for(screen, self.state.is_maximized())
        {
            self.set_location(location);
        }
    }

    /// The left button was released.
    pub fn pointer_released(&mut self) {
        self.resize = None;
        self.drag = None;
        self.hover = None;
        self.set_cursor(CursorIcon::Default);
    }

    /// The pointer left the window.
    pub fn pointer_left(&mut self) {
        if self.resize.is_none() {
            self.hover = None;
            self.set_cursor(CursorIcon::Default);
        }
    }

    // =========================================================================
    // Host notifications
    // =========================================================================

    /// The host window moved.
    pub fn on_host_moved(&mut self, bounds: Rect, now: Instant) {
        self.track_host_bounds(bounds, now);
    }

    /// The host window resized.
    pub fn on_host_resized(&mut self, bounds: Rect, now: Instant) {
        self.track_host_bounds(bounds, now);
    }

    fn track_host_bounds(&mut self, bounds: Rect, now: Instant) {
        if self.state.is_normal() {
            self.normal_bounds = Some(bounds);
        }
        self.refresh.trigger(now);
    }

    /// The window manager changed minimized or maximized on its own.
    pub fn on_host_state_changed(&mut self, minimized: bool, maximized: bool) {
        if minimized != self.state.is_minimized() {
            if minimized {
                self.pre_minimize_state = self.state;
                self.state = self.state.with_minimized(true);
            } else {
                self.state = self.state.with_minimized(false).with_maximized(maximized);
                self.restore_snapshot();
                self.refresh_chrome();
                return;
            }
        }

        if !minimized && maximized != self.state.is_maximized() {
            self.state = self.state.with_maximized(maximized);
        }

        tracing::debug!(target: targets::WINDOW, state = ?self.state, "host state changed");
        self.refresh_chrome();
    }

    /// The window became visible for the first time.
    pub fn on_shown(&mut self, now: Instant) {
        let delay = self.config.pending_fullscreen_delay;
        if let Some(native) = self.fullscreen.native_mut() {
            native.schedule_pending(now, delay);
        }
        self.refresh_chrome();
    }

    /// The window gained focus.
    pub fn on_activated(&mut self) {
        if self.config.main_window {
            self.pause_hook.resume();
        }
    }

    /// The window lost focus to `target`.
    ///
    /// Losing the main window to another application pauses the app, and
    /// a generic fullscreen window gets out of the way.
    pub fn on_deactivated(&mut self, target: FocusTarget) {
        if !self.config.main_window || target != FocusTarget::External {
            return;
        }

        self.pause_hook.pause();
        if self.state.is_fullscreen() && !self.uses_native_fullscreen_rules() {
            self.set_minimized(true);
        }
    }

    // =========================================================================
    // Timing
    // =========================================================================

    /// Run timed work that is due at `now`.
    pub fn poll(&mut self, now: Instant) {
        self.affinity
            .assert_same_thread_with_msg("WindowChrome polled off its UI thread");

        if self.refresh.poll(now) {
            tracing::trace!(target: targets::CHROME, "trailing refresh");
            self.refresh_chrome();
            self.host.request_relayout();
        }

        let pending = self
            .fullscreen
            .native_mut()
            .and_then(|native| native.poll_pending(now));
        if let Some(fullscreen) = pending {
            tracing::debug!(target: targets::FULLSCREEN, fullscreen, "replaying deferred fullscreen request");
            self.set_fullscreen(fullscreen);
        }
    }

    /// When [`poll`](Self::poll) next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest(
            self.refresh.deadline(),
            self.fullscreen.native().and_then(|native| native.deadline()),
        )
    }
}
