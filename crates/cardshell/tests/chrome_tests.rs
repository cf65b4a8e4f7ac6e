//! Behaviour tests for the window chrome against a recording host.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use cardshell::window::{
    ChromeConfig, ChromeEventRouter, CursorIcon, FocusTarget, FocusTracker, NativeFullscreenBridge,
    NativeFullscreenEvent, Point, Rect, ResizeDirection, Size, TitleBar, WindowChrome, WindowHost,
    WindowIcon, WindowLayout, WindowState,
};
use cardshell::{
    MemoryPreferences, Os, Pausable, PauseHook, PreferenceStore, ShellContext,
};
use winit::dpi::PhysicalPosition;
use winit::event::{DeviceId, ElementState, MouseButton, WindowEvent};
use winit::window::WindowId;

const DISPLAY: Rect = Rect::new(0, 0, 1920, 1080);
const WORK_AREA: Rect = Rect::new(0, 0, 1920, 1040);
const START: Rect = Rect::new(100, 100, 800, 600);

/// Host whose window manager applies every request immediately.
#[derive(Default)]
struct FakeHost {
    bounds: Cell<Rect>,
    visible: Cell<bool>,
    minimized: Cell<bool>,
    maximized: Cell<bool>,
    fullscreen: Cell<bool>,
    restore: Cell<Option<Rect>>,
    border_visible: Cell<Option<bool>>,
    cursor: Cell<Option<CursorIcon>>,
    title: RefCell<String>,
    icon: RefCell<Option<WindowIcon>>,
    maximized_hint: Cell<Option<Rect>>,
    relayouts: Cell<u32>,
    calls: RefCell<Vec<String>>,
}

impl FakeHost {
    fn new() -> Self {
        let host = Self::default();
        host.bounds.set(START);
        host.visible.set(true);
        host
    }

    fn hidden() -> Self {
        let host = Self::new();
        host.visible.set(false);
        host
    }

    fn log(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl WindowHost for FakeHost {
    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn set_bounds(&self, bounds: Rect) {
        self.log(format!("set_bounds {bounds:?}"));
        self.bounds.set(bounds);
    }

    fn min_size(&self) -> Size {
        Size::new(200, 150)
    }

    fn max_size(&self) -> Option<Size> {
        Some(Size::new(1600, 1000))
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn is_minimized(&self) -> Option<bool> {
        Some(self.minimized.get())
    }

    fn is_maximized(&self) -> Option<bool> {
        Some(self.maximized.get())
    }

    fn set_minimized(&self, minimized: bool) {
        self.log(format!("set_minimized {minimized}"));
        self.minimized.set(minimized);
    }

    fn set_maximized(&self, maximized: bool) {
        self.log(format!("set_maximized {maximized}"));
        if maximized && !self.maximized.get() {
            self.restore.set(Some(self.bounds.get()));
            self.bounds.set(WORK_AREA);
        } else if !maximized && self.maximized.get() {
            // Deliberately lands somewhere else; the chrome must put it back.
            self.bounds.set(Rect::new(0, 0, 300, 300));
        }
        self.maximized.set(maximized);
    }

    fn set_fullscreen(&self, fullscreen: bool) {
        self.log(format!("set_fullscreen {fullscreen}"));
        if fullscreen {
            self.bounds.set(DISPLAY);
        } else if self.fullscreen.get() {
            self.bounds.set(Rect::new(0, 0, 300, 300));
        }
        self.fullscreen.set(fullscreen);
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    fn display_bounds(&self) -> Rect {
        DISPLAY
    }

    fn work_area(&self) -> Rect {
        WORK_AREA
    }

    fn set_maximized_bounds_hint(&self, bounds: Option<Rect>) {
        self.maximized_hint.set(bounds);
    }

    fn set_border_visible(&self, visible: bool) {
        self.border_visible.set(Some(visible));
    }

    fn set_cursor(&self, cursor: CursorIcon) {
        self.cursor.set(Some(cursor));
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn set_icon(&self, icon: Option<&WindowIcon>) {
        *self.icon.borrow_mut() = icon.cloned();
    }

    fn request_relayout(&self) {
        self.relayouts.set(self.relayouts.get() + 1);
    }
}

#[derive(Default)]
struct FakeTitleBar {
    visible: Cell<Option<bool>>,
    buttons: RefCell<Vec<WindowState>>,
    title: RefCell<String>,
    icon: RefCell<Option<WindowIcon>>,
}

impl TitleBar for FakeTitleBar {
    fn update_buttons(&self, state: WindowState) {
        self.buttons.borrow_mut().push(state);
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(Some(visible));
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn set_icon(&self, icon: Option<&WindowIcon>) {
        *self.icon.borrow_mut() = icon.cloned();
    }
}

/// Native bridge that records requests; transitions are delivered by the test.
#[derive(Clone, Default)]
struct FakeBridge {
    requests: Rc<RefCell<Vec<bool>>>,
}

impl NativeFullscreenBridge for FakeBridge {
    fn install(&mut self) -> cardshell::Result<()> {
        Ok(())
    }

    fn request_toggle(&mut self, enter: bool) {
        self.requests.borrow_mut().push(enter);
    }
}

#[derive(Default)]
struct Sound {
    paused: Cell<u32>,
    resumed: Cell<u32>,
}

impl Pausable for Sound {
    fn pause(&self) {
        self.paused.set(self.paused.get() + 1);
    }

    fn resume(&self) {
        self.resumed.set(self.resumed.get() + 1);
    }
}

type Chrome = WindowChrome<FakeHost, FakeTitleBar>;

struct Setup {
    os: Os,
    host: FakeHost,
    config: ChromeConfig,
    bridge: Option<FakeBridge>,
    preferences: Rc<RefCell<MemoryPreferences>>,
    pause: Rc<PauseHook>,
}

impl Setup {
    fn new(os: Os) -> Self {
        Self {
            os,
            host: FakeHost::new(),
            config: ChromeConfig::main(),
            bridge: None,
            preferences: Rc::new(RefCell::new(MemoryPreferences::new())),
            pause: Rc::new(PauseHook::new()),
        }
    }

    fn native(mut self, bridge: &FakeBridge) -> Self {
        self.bridge = Some(bridge.clone());
        self
    }

    fn host(mut self, host: FakeHost) -> Self {
        self.host = host;
        self
    }

    fn config(mut self, config: ChromeConfig) -> Self {
        self.config = config;
        self
    }

    fn build(self) -> Chrome {
        let mut context = ShellContext::new(self.os, self.preferences.clone(), self.pause.clone());
        if let Some(bridge) = self.bridge {
            context = context.with_native_fullscreen(Box::new(bridge));
        }
        WindowChrome::new(self.host, FakeTitleBar::default(), context, self.config)
    }
}

fn linux() -> Chrome {
    Setup::new(Os::Linux).build()
}

// =============================================================================
// Maximize / fullscreen bounds bookkeeping
// =============================================================================

#[test]
fn test_maximize_round_trip_restores_bounds() {
    let mut chrome = linux();

    chrome.set_maximized(true);
    assert!(chrome.is_maximized());
    assert_eq!(chrome.host().bounds(), WORK_AREA);
    assert_eq!(chrome.normal_bounds(), Some(START));

    chrome.set_maximized(false);
    assert!(chrome.is_normal());
    assert_eq!(chrome.host().bounds(), START);
}

#[test]
fn test_fullscreen_exit_restores_bounds_from_before_maximize() {
    let mut chrome = linux();

    chrome.set_maximized(true);
    chrome.set_fullscreen(true);
    assert!(chrome.is_fullscreen());

    chrome.set_maximized(false);
    chrome.set_fullscreen(false);
    assert!(chrome.is_normal());
    assert_eq!(chrome.host().bounds(), START);
}

#[test]
fn test_fullscreen_exit_restores_bounds_from_before_fullscreen() {
    let mut chrome = linux();

    chrome.set_fullscreen(true);
    assert_eq!(chrome.host().bounds(), DISPLAY);
    chrome.set_maximized(true);
    chrome.set_maximized(false);
    chrome.set_fullscreen(false);

    assert!(chrome.is_normal());
    assert_eq!(chrome.host().bounds(), START);
}

#[test]
fn test_layout_with_both_flags_keeps_maximized_after_fullscreen() {
    let mut chrome = linux();

    chrome.set_window_layout(50, 60, 700, 500, true, true);
    assert!(chrome.is_maximized());
    assert!(chrome.is_fullscreen());
    assert_eq!(chrome.normal_bounds(), Some(Rect::new(50, 60, 700, 500)));

    chrome.set_fullscreen(false);
    assert!(!chrome.is_fullscreen());
    assert!(chrome.is_maximized());
    assert!(chrome.host().maximized.get());
}

#[test]
fn test_set_normal_bounds_deferred_while_maximized() {
    let mut chrome = linux();
    chrome.set_maximized(true);

    let target = Rect::new(10, 10, 640, 480);
    chrome.set_normal_bounds(target);
    assert_eq!(chrome.host().bounds(), WORK_AREA);

    chrome.set_maximized(false);
    assert_eq!(chrome.host().bounds(), target);
}

#[test]
fn test_redundant_requests_are_ignored() {
    let mut chrome = linux();
    chrome.set_maximized(false);
    chrome.set_fullscreen(false);
    chrome.set_minimized(false);
    assert!(chrome.host().calls().is_empty());
}

#[test]
fn test_maximize_on_windows_sets_work_area_hint() {
    let mut chrome = Setup::new(Os::Windows).build();
    chrome.set_maximized(true);
    assert_eq!(chrome.host().maximized_hint.get(), Some(WORK_AREA));

    let mut chrome = linux();
    chrome.set_maximized(true);
    assert_eq!(chrome.host().maximized_hint.get(), None);
}

#[test]
fn test_restore_layout_validates_against_work_area() {
    let mut chrome = linux();
    chrome.restore_layout(WindowLayout::new(-5000, 3000, 800, 600));

    let bounds = chrome.host().bounds();
    assert_eq!(bounds.x, -750);
    assert_eq!(bounds.y, 990);
    assert_eq!(chrome.window_layout(), WindowLayout::new(-750, 990, 800, 600));
}

#[test]
fn test_window_layout_reports_flags() {
    let mut chrome = linux();
    chrome.set_maximized(true);
    assert_eq!(
        chrome.window_layout(),
        WindowLayout::new(100, 100, 800, 600).with_maximized(true)
    );
}

#[test]
fn test_save_layout_only_for_main_window() {
    let setup = Setup::new(Os::Linux);
    let preferences = setup.preferences.clone();
    let mut chrome = setup.build();
    chrome.set_maximized(true);
    chrome.save_layout().unwrap();
    assert_eq!(
        preferences.borrow().window_layout(),
        Some(WindowLayout::new(100, 100, 800, 600).with_maximized(true))
    );

    let setup = Setup::new(Os::Linux).config(ChromeConfig::new());
    let preferences = setup.preferences.clone();
    let chrome = setup.build();
    chrome.save_layout().unwrap();
    assert_eq!(preferences.borrow().save_count(), 0);
}

#[test]
fn test_set_location_leaves_maximized() {
    let mut chrome = linux();
    chrome.set_maximized(true);
    chrome.set_location(Point::new(300, 200));

    assert!(chrome.is_normal());
    assert_eq!(chrome.host().bounds(), Rect::new(300, 200, 800, 600));
    assert_eq!(chrome.normal_bounds(), Some(Rect::new(300, 200, 800, 600)));
}

#[test]
fn test_set_size_leaves_fullscreen() {
    let mut chrome = linux();
    chrome.set_fullscreen(true);
    chrome.set_size(Size::new(640, 480));

    assert!(chrome.is_normal());
    assert_eq!(chrome.host().bounds(), Rect::new(100, 100, 640, 480));
}

#[test]
fn test_update_normal_bounds_ignored_while_maximized() {
    let mut chrome = linux();
    chrome.set_maximized(true);
    assert_eq!(chrome.host().bounds(), WORK_AREA);

    chrome.update_normal_bounds();
    assert_eq!(chrome.normal_bounds(), Some(START));

    chrome.set_maximized(false);
    assert_eq!(chrome.host().bounds(), START);
}

#[test]
fn test_update_normal_bounds_ignored_while_fullscreen() {
    let mut chrome = linux();
    chrome.set_fullscreen(true);
    chrome.update_normal_bounds();
    assert_eq!(chrome.normal_bounds(), Some(START));
}

#[test]
fn test_set_location_during_native_fullscreen_keeps_normal_bounds() {
    let bridge = FakeBridge::default();
    let mut chrome = Setup::new(Os::MacOs).native(&bridge).build();
    chrome.set_fullscreen(true);
    chrome.on_native_fullscreen(NativeFullscreenEvent::Entering);

    chrome.set_location(Point::new(5, 5));
    // The exit was only requested; the window manager has not left yet.
    assert_eq!(*bridge.requests.borrow(), vec![true, false]);
    assert!(chrome.is_fullscreen());
    assert_eq!(chrome.normal_bounds(), Some(START));
    assert_eq!(chrome.window_layout().bounds(), START);

    chrome.set_size(Size::new(640, 480));
    assert_eq!(chrome.normal_bounds(), Some(START));
}

// =============================================================================
// Minimize
// =============================================================================

#[test]
fn test_minimize_snapshot_restores_maximized() {
    let mut chrome = linux();
    chrome.set_maximized(true);
    chrome.set_minimized(true);
    assert!(chrome.is_minimized());

    // The window manager forgot maximized while minimized.
    chrome.host().maximized.set(false);

    chrome.set_minimized(false);
    assert!(!chrome.is_minimized());
    assert!(chrome.is_maximized());
    assert!(chrome.host().maximized.get());
}

#[test]
fn test_minimize_leaves_generic_fullscreen_and_restores_it() {
    let mut chrome = linux();
    chrome.set_fullscreen(true);
    chrome.set_minimized(true);

    assert!(chrome.is_minimized());
    assert!(!chrome.is_fullscreen());
    assert!(!chrome.host().fullscreen.get());
    assert!(WindowState::new(true, false, true).is_err());

    chrome.set_minimized(false);
    assert!(chrome.is_fullscreen());
    assert!(!chrome.is_minimized());
}

#[test]
fn test_native_fullscreen_cannot_minimize() {
    let bridge = FakeBridge::default();
    let mut chrome = Setup::new(Os::MacOs).native(&bridge).build();
    chrome.set_fullscreen(true);
    chrome.on_native_fullscreen(NativeFullscreenEvent::Entering);

    chrome.set_minimized(true);
    assert!(!chrome.is_minimized());
    assert!(chrome.is_fullscreen());
}

#[test]
fn test_host_reported_minimize_restores_snapshot() {
    let mut chrome = linux();
    chrome.set_maximized(true);

    chrome.host().minimized.set(true);
    chrome.on_host_state_changed(true, true);
    assert!(chrome.is_minimized());

    chrome.host().minimized.set(false);
    chrome.on_host_state_changed(false, false);
    assert!(chrome.is_maximized());
    assert!(chrome.host().maximized.get());
}

// =============================================================================
// Border and title bar
// =============================================================================

#[test]
fn test_first_refresh_shows_chrome() {
    let chrome = linux();
    assert!(!chrome.is_border_hidden());
    assert!(!chrome.is_title_bar_hidden());
    assert_eq!(chrome.host().border_visible.get(), Some(true));
    assert_eq!(chrome.title_bar().visible.get(), Some(true));
}

#[test]
fn test_border_hidden_when_maximized_or_fullscreen() {
    let mut chrome = linux();
    chrome.set_maximized(true);
    assert!(chrome.is_border_hidden());
    chrome.set_maximized(false);
    assert!(!chrome.is_border_hidden());
    chrome.set_fullscreen(true);
    assert!(chrome.is_border_hidden());
}

#[test]
fn test_border_not_recomputed_while_minimized() {
    let mut chrome = linux();
    chrome.set_maximized(true);
    chrome.set_minimized(true);
    assert!(chrome.is_border_hidden());
    chrome.on_host_state_changed(true, false);
    assert!(chrome.is_border_hidden());
}

#[test]
fn test_title_bar_hidden_in_generic_fullscreen_unless_locked() {
    let mut chrome = linux();
    chrome.set_fullscreen(true);
    assert!(chrome.is_title_bar_hidden());
    assert_eq!(chrome.title_bar().visible.get(), Some(false));

    chrome.set_lock_title_bar(true);
    assert!(!chrome.is_title_bar_hidden());
    assert_eq!(chrome.title_bar().visible.get(), Some(true));
}

#[test]
fn test_buttons_refresh_on_every_change() {
    let mut chrome = linux();
    let before = chrome.title_bar().buttons.borrow().len();
    chrome.set_maximized(true);
    let buttons = chrome.title_bar().buttons.borrow();
    assert!(buttons.len() > before);
    assert_eq!(buttons.last().copied(), WindowState::new(false, true, false).ok());
}

#[test]
fn test_lock_title_bar_persists_for_main_window() {
    let setup = Setup::new(Os::Linux);
    let preferences = setup.preferences.clone();
    let mut chrome = setup.build();

    chrome.set_lock_title_bar(true);
    chrome.set_lock_title_bar(true);
    assert!(chrome.lock_title_bar());
    assert!(preferences.borrow().lock_title_bar());
    assert_eq!(preferences.borrow().save_count(), 1);
}

#[test]
fn test_lock_title_bar_not_persisted_for_secondary_window() {
    let setup = Setup::new(Os::Linux).config(ChromeConfig::new());
    let preferences = setup.preferences.clone();
    let mut chrome = setup.build();

    chrome.set_lock_title_bar(true);
    assert!(chrome.lock_title_bar());
    assert!(!preferences.borrow().lock_title_bar());
    assert_eq!(preferences.borrow().save_count(), 0);
}

#[test]
fn test_lock_title_bar_read_from_preferences() {
    let setup = Setup::new(Os::Linux);
    setup.preferences.borrow_mut().set_lock_title_bar(true);
    let chrome = setup.build();
    assert!(chrome.lock_title_bar());
}

#[test]
fn test_set_title_reaches_host_and_title_bar() {
    let mut chrome = linux();
    chrome.set_title("Deck Editor");
    assert_eq!(chrome.title(), "Deck Editor");
    assert_eq!(*chrome.host().title.borrow(), "Deck Editor");
    assert_eq!(*chrome.title_bar().title.borrow(), "Deck Editor");
}

#[test]
fn test_set_icon_reaches_host_and_title_bar() {
    let mut chrome = linux();
    let icon = WindowIcon::from_rgba(vec![200; 4 * 4 * 4], 4, 4).unwrap();
    chrome.set_icon(Some(icon.clone()));
    assert_eq!(chrome.icon(), Some(&icon));
    assert_eq!(chrome.host().icon.borrow().as_ref(), Some(&icon));
    assert_eq!(chrome.title_bar().icon.borrow().as_ref(), Some(&icon));

    chrome.set_icon(None);
    assert!(chrome.icon().is_none());
    assert!(chrome.host().icon.borrow().is_none());
    assert!(chrome.title_bar().icon.borrow().is_none());
}

// =============================================================================
// Native fullscreen
// =============================================================================

#[test]
fn test_native_fullscreen_transitions() {
    let bridge = FakeBridge::default();
    let mut chrome = Setup::new(Os::MacOs).native(&bridge).build();
    assert!(chrome.uses_native_fullscreen_rules());

    chrome.set_fullscreen(true);
    assert_eq!(*bridge.requests.borrow(), vec![true]);
    assert!(!chrome.is_fullscreen());

    chrome.on_native_fullscreen(NativeFullscreenEvent::Entering);
    assert!(chrome.is_fullscreen());
    assert_eq!(chrome.host().bounds(), DISPLAY);
    // Native rules keep the title bar
    assert!(!chrome.is_title_bar_hidden());

    chrome.set_fullscreen(false);
    chrome.on_native_fullscreen(NativeFullscreenEvent::Exiting);
    assert!(!chrome.is_fullscreen());
    assert_eq!(chrome.host().bounds(), START);
    assert_eq!(*bridge.requests.borrow(), vec![true, false]);
}

#[test]
fn test_native_fullscreen_before_shown_is_replayed() {
    let bridge = FakeBridge::default();
    let mut chrome = Setup::new(Os::MacOs)
        .native(&bridge)
        .host(FakeHost::hidden())
        .build();

    chrome.set_fullscreen(true);
    assert!(bridge.requests.borrow().is_empty());

    let shown = Instant::now();
    chrome.host().visible.set(true);
    chrome.on_shown(shown);
    assert_eq!(chrome.next_deadline(), Some(shown + Duration::from_millis(100)));

    chrome.poll(shown + Duration::from_millis(50));
    assert!(bridge.requests.borrow().is_empty());

    chrome.poll(shown + Duration::from_millis(100));
    assert_eq!(*bridge.requests.borrow(), vec![true]);
    assert_eq!(chrome.next_deadline(), None);
}

#[test]
fn test_generic_fullscreen_on_macos_without_bridge() {
    let mut chrome = Setup::new(Os::MacOs).build();
    assert!(!chrome.uses_native_fullscreen_rules());
    chrome.set_fullscreen(true);
    assert!(chrome.is_fullscreen());
    assert!(chrome.host().fullscreen.get());
}

// =============================================================================
// Pause / resume
// =============================================================================

fn with_sound(setup: &Setup) -> Rc<Sound> {
    let sound = Rc::new(Sound::default());
    let target: Rc<dyn Pausable> = sound.clone();
    setup.pause.register(&target);
    sound
}

#[test]
fn test_external_deactivation_pauses_and_minimizes_fullscreen() {
    let setup = Setup::new(Os::Linux);
    let sound = with_sound(&setup);
    let mut chrome = setup.build();
    chrome.set_fullscreen(true);

    chrome.on_deactivated(FocusTarget::External);
    chrome.on_deactivated(FocusTarget::External);
    assert_eq!(sound.paused.get(), 1);
    assert!(chrome.is_minimized());

    chrome.on_activated();
    chrome.on_activated();
    assert_eq!(sound.resumed.get(), 1);
}

#[test]
fn test_same_app_deactivation_does_nothing() {
    let setup = Setup::new(Os::Linux);
    let sound = with_sound(&setup);
    let mut chrome = setup.build();
    chrome.set_fullscreen(true);

    chrome.on_deactivated(FocusTarget::SameApp);
    assert_eq!(sound.paused.get(), 0);
    assert!(chrome.is_fullscreen());
}

#[test]
fn test_secondary_window_does_not_pause() {
    let setup = Setup::new(Os::Linux).config(ChromeConfig::new());
    let sound = with_sound(&setup);
    let mut chrome = setup.build();

    chrome.on_deactivated(FocusTarget::External);
    assert_eq!(sound.paused.get(), 0);
}

// =============================================================================
// Pointer: resize and move
// =============================================================================

#[test]
fn test_hover_sets_resize_cursor() {
    let mut chrome = linux();
    chrome.pointer_moved(Point::new(2, 2));
    assert_eq!(chrome.hover_direction(), Some(ResizeDirection::NorthWest));
    assert_eq!(chrome.host().cursor.get(), Some(CursorIcon::NwResize));

    chrome.pointer_left();
    assert_eq!(chrome.hover_direction(), None);
    assert_eq!(chrome.cursor(), CursorIcon::Default);
}

#[test]
fn test_no_resize_hover_while_maximized() {
    let mut chrome = linux();
    chrome.set_maximized(true);
    chrome.pointer_moved(Point::new(2, 2));
    assert_eq!(chrome.hover_direction(), None);
}

#[test]
fn test_top_left_resize_drag() {
    let mut chrome = linux();
    chrome.pointer_moved(Point::new(1, 1));
    chrome.pointer_pressed(MouseButton::Left, Point::new(1, 1), Point::new(101, 101), 1);
    assert!(chrome.is_resizing());

    chrome.pointer_dragged(Point::new(91, 96));
    assert_eq!(chrome.host().bounds(), Rect::new(90, 95, 810, 605));
    assert_eq!(chrome.normal_bounds(), Some(Rect::new(90, 95, 810, 605)));

    // Clamped to the host's maximum; the bottom-right corner stays put
    chrome.pointer_dragged(Point::new(-2000, -2000));
    let bounds = chrome.host().bounds();
    assert_eq!(bounds.size(), Size::new(1600, 1000));
    assert_eq!((bounds.right(), bounds.bottom()), (900, 700));

    chrome.pointer_released();
    assert!(!chrome.is_resizing());
    assert_eq!(chrome.cursor(), CursorIcon::Default);
}

#[test]
fn test_right_button_does_not_resize() {
    let mut chrome = linux();
    chrome.pointer_moved(Point::new(1, 1));
    chrome.pointer_pressed(MouseButton::Right, Point::new(1, 1), Point::new(101, 101), 1);
    assert!(!chrome.is_resizing());
}

#[test]
fn test_title_bar_drag_moves_window() {
    let mut chrome = linux();
    chrome.pointer_moved(Point::new(400, 15));
    chrome.pointer_pressed(MouseButton::Left, Point::new(400, 15), Point::new(500, 115), 1);
    assert!(chrome.is_dragging());

    chrome.pointer_dragged(Point::new(520, 125));
    assert_eq!(chrome.host().bounds().origin(), Point::new(120, 110));
}

#[test]
fn test_title_bar_double_click_toggles_maximized() {
    let mut chrome = linux();
    chrome.pointer_pressed(MouseButton::Left, Point::new(400, 15), Point::new(500, 115), 2);
    assert!(chrome.is_maximized());
    chrome.pointer_pressed(MouseButton::Left, Point::new(400, 15), Point::new(400, 15), 2);
    assert!(!chrome.is_maximized());
    assert_eq!(chrome.host().bounds(), START);
}

#[test]
fn test_title_bar_triple_click_toggles_maximized() {
    let mut chrome = linux();
    chrome.pointer_pressed(MouseButton::Left, Point::new(400, 15), Point::new(500, 115), 3);
    assert!(chrome.is_maximized());
    assert!(!chrome.is_dragging());
}

#[test]
fn test_maximized_drag_dead_zone() {
    let mut chrome = linux();
    chrome.set_maximized(true);
    chrome.pointer_pressed(MouseButton::Left, Point::new(400, 15), Point::new(400, 15), 1);

    chrome.pointer_dragged(Point::new(403, 18));
    assert!(chrome.is_maximized());

    chrome.pointer_dragged(Point::new(404, 18));
    assert!(!chrome.is_maximized());
    assert_eq!(chrome.host().bounds().origin(), Point::new(4, 3));
}

#[test]
fn test_title_bar_press_ignored_in_fullscreen() {
    let mut chrome = linux();
    chrome.set_fullscreen(true);
    chrome.set_lock_title_bar(true);
    chrome.pointer_pressed(MouseButton::Left, Point::new(400, 15), Point::new(400, 15), 2);
    assert!(!chrome.is_dragging());
    assert!(!chrome.is_maximized());
}

// =============================================================================
// Debounced refresh
// =============================================================================

#[test]
fn test_host_moves_are_debounced() {
    let mut chrome = linux();
    let start = Instant::now();
    let relayouts = chrome.host().relayouts.get();

    chrome.on_host_moved(Rect::new(110, 100, 800, 600), start);
    chrome.on_host_moved(Rect::new(120, 100, 800, 600), start + Duration::from_millis(500));
    assert_eq!(chrome.normal_bounds(), Some(Rect::new(120, 100, 800, 600)));
    assert_eq!(chrome.next_deadline(), Some(start + Duration::from_millis(1250)));

    chrome.poll(start + Duration::from_millis(1000));
    assert_eq!(chrome.host().relayouts.get(), relayouts);

    chrome.poll(start + Duration::from_millis(1250));
    assert_eq!(chrome.host().relayouts.get(), relayouts + 1);
    assert_eq!(chrome.next_deadline(), None);
}

#[test]
fn test_host_moves_ignored_for_normal_bounds_while_maximized() {
    let mut chrome = linux();
    chrome.set_maximized(true);
    chrome.on_host_moved(Rect::new(0, 0, 1920, 1040), Instant::now());
    assert_eq!(chrome.normal_bounds(), Some(START));
}

// =============================================================================
// Event router
// =============================================================================

fn cursor_moved(x: f64, y: f64) -> WindowEvent {
    WindowEvent::CursorMoved {
        device_id: DeviceId::dummy(),
        position: PhysicalPosition::new(x, y),
    }
}

fn mouse(state: ElementState) -> WindowEvent {
    WindowEvent::MouseInput {
        device_id: DeviceId::dummy(),
        state,
        button: MouseButton::Left,
    }
}

#[test]
fn test_router_double_click_maximizes() {
    let mut chrome = linux();
    let mut router = ChromeEventRouter::new(WindowId::dummy(), Rc::new(FocusTracker::new()));
    let start = Instant::now();

    router.handle_window_event(&mut chrome, &cursor_moved(400.0, 15.0), start);
    router.handle_window_event(&mut chrome, &mouse(ElementState::Pressed), start);
    router.handle_window_event(&mut chrome, &mouse(ElementState::Released), start);
    let later = start + Duration::from_millis(200);
    router.handle_window_event(&mut chrome, &mouse(ElementState::Pressed), later);
    router.handle_window_event(&mut chrome, &mouse(ElementState::Released), later);

    assert!(chrome.is_maximized());
}

#[test]
fn test_router_edge_drag_resizes() {
    let mut chrome = linux();
    let mut router = ChromeEventRouter::new(WindowId::dummy(), Rc::new(FocusTracker::new()));
    let now = Instant::now();

    router.handle_window_event(&mut chrome, &cursor_moved(799.0, 300.0), now);
    assert_eq!(chrome.hover_direction(), Some(ResizeDirection::East));
    router.handle_window_event(&mut chrome, &mouse(ElementState::Pressed), now);
    router.handle_window_event(&mut chrome, &cursor_moved(849.0, 300.0), now);
    router.handle_window_event(&mut chrome, &mouse(ElementState::Released), now);

    assert_eq!(chrome.host().bounds(), Rect::new(100, 100, 850, 600));
    assert!(!chrome.is_resizing());
}

#[test]
fn test_router_resolves_external_focus_loss() {
    let setup = Setup::new(Os::Linux);
    let sound = with_sound(&setup);
    let mut chrome = setup.build();
    let focus = Rc::new(FocusTracker::new());
    let mut router = ChromeEventRouter::new(WindowId::dummy(), focus.clone());
    let now = Instant::now();

    router.handle_window_event(&mut chrome, &WindowEvent::Focused(true), now);
    router.handle_window_event(&mut chrome, &WindowEvent::Focused(false), now);
    assert_eq!(sound.paused.get(), 0);

    router.about_to_wait(&mut chrome, now);
    assert_eq!(sound.paused.get(), 1);

    router.handle_window_event(&mut chrome, &WindowEvent::Focused(true), now);
    assert_eq!(sound.resumed.get(), 1);
}
