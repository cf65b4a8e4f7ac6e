//! The frameless application window.
//!
//! cardshell draws its own border and title bar, so everything a window
//! manager normally provides for decorated windows lives here:
//!
//! - [`geometry`] types and the persisted [`WindowLayout`],
//! - the [`WindowState`] record,
//! - hit testing ([`FramelessWindowChrome`]) and drag sessions,
//! - fullscreen strategies ([`PlatformFullscreenController`]),
//! - the [`WindowChrome`] state machine tying them together,
//! - the winit [`WinitHost`] and [`ChromeEventRouter`].
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Instant;
//! use cardshell::window::{ChromeConfig, WindowChrome, WinitHost, WinitFullscreenBridge};
//! use cardshell::ShellContext;
//!
//! let window = Arc::new(event_loop.create_window(attributes)?);
//! let context = ShellContext::detect()
//!     .with_native_fullscreen(Box::new(WinitFullscreenBridge::new(window.clone())));
//! let mut chrome = WindowChrome::new(WinitHost::new(window.clone()), title_bar, context, ChromeConfig::main());
//!
//! chrome.restore_layout(saved_layout);
//! window.set_visible(true);
//! chrome.on_shown(Instant::now());
//! ```

mod chrome;
mod drag;
mod event_router;
mod frameless_chrome;
mod fullscreen;
pub mod geometry;
mod host;
mod icon;
mod state;
mod winit_host;

pub use chrome::{
    ChromeConfig, DEFAULT_DEBOUNCE_INTERVAL, DEFAULT_PENDING_FULLSCREEN_DELAY, FocusTarget,
    WindowChrome,
};
pub use drag::{MAXIMIZED_DRAG_THRESHOLD_SQ, MoveSession, ResizeSession};
pub use event_router::{
    ChromeEventRouter, ClickCounter, DEFAULT_DOUBLE_CLICK_DISTANCE, DEFAULT_DOUBLE_CLICK_TIME_MS,
    FocusTracker,
};
pub use frameless_chrome::{
    ChromeHitTestResult, DEFAULT_BORDER_THICKNESS, DEFAULT_TITLE_BAR_HEIGHT, FramelessWindowChrome,
    ResizeDirection, cursor_for_direction,
};
pub use fullscreen::{NativeFullscreenEvent, NativeMacController, PlatformFullscreenController};
pub use geometry::{Point, Rect, Size, WindowLayout};
pub use host::{NativeFullscreenBridge, TitleBar, WindowHost};
pub use icon::WindowIcon;
pub use state::{NativeFullscreenState, WindowState};
pub use winit_host::{WinitFullscreenBridge, WinitHost, frameless_attributes};

/// Re-exported so hosts and tests can name pointer shapes.
pub use cursor_icon::CursorIcon;
