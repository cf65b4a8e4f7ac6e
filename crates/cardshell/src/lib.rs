//! cardshell - desktop shell for a trading-card-game client.
//!
//! This is the umbrella crate. It provides the frameless main window
//! ([`window`]), the preferences it persists ([`prefs`]), the background
//! pause hook ([`pause`]) and re-exports the core utilities and the card
//! image cache.
//!
//! # Example
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use cardshell::prefs::TomlPreferences;
//! use cardshell::{Os, PauseHook, ShellContext};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     cardshell::logging::init();
//!
//!     let preferences = TomlPreferences::load_default()?;
//!     let context = ShellContext::new(
//!         Os::detect(),
//!         Rc::new(RefCell::new(preferences)),
//!         Rc::new(PauseHook::new()),
//!     );
//!     // Create the winit window and its WindowChrome here...
//!     # let _ = context;
//!     Ok(())
//! }
//! ```

pub use cardshell_core::*;

mod context;
mod error;
pub mod pause;
pub mod prefs;
pub mod window;

/// Card image download cache.
pub mod images {
    pub use cardshell_net::images::*;
    pub use cardshell_net::{ImageError, Result};
}

pub use context::{SharedPreferences, ShellContext};
pub use error::{ChromeError, Result};
pub use pause::{Pausable, PauseHook};
pub use prefs::{MemoryPreferences, PreferenceStore, TomlPreferences};
pub use window::{ChromeConfig, WindowChrome, WindowLayout, WindowState};
