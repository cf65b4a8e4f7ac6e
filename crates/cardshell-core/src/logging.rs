//! Logging setup and target names.
//!
//! cardshell logs through `tracing`. Libraries never install a subscriber;
//! applications call [`init`] (or install their own) once at startup:
//!
//! ```no_run
//! cardshell_core::logging::init();
//! tracing::info!(target: cardshell_core::logging::targets::WINDOW, "ready");
//! ```
//!
//! Filtering follows `RUST_LOG`, e.g.
//! `RUST_LOG=cardshell::fullscreen=debug,cardshell_net::images=trace`.

use tracing_subscriber::EnvFilter;

/// Span names used for tracing.
pub mod span_names {
    /// One image download, from request to rename.
    pub const IMAGE_FETCH: &str = "cardshell::image_fetch";
    /// Applying a persisted window layout.
    pub const APPLY_LAYOUT: &str = "cardshell::apply_layout";
}

/// Target names for log filtering.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "cardshell_core";
    /// Worker pool.
    pub const THREADPOOL: &str = "cardshell_core::threadpool";
    /// Window bounds and state bookkeeping.
    pub const WINDOW: &str = "cardshell::window";
    /// Border, title bar and drag handling.
    pub const CHROME: &str = "cardshell::chrome";
    /// Fullscreen strategies.
    pub const FULLSCREEN: &str = "cardshell::fullscreen";
    /// Preference persistence.
    pub const PREFS: &str = "cardshell::prefs";
    /// Image fetch cache.
    pub const IMAGES: &str = "cardshell_net::images";
    /// HTTP transfers.
    pub const HTTP: &str = "cardshell_net::http";
}

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatted subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already set, in which case the
/// existing one stays in charge.
pub fn init() -> bool {
    init_with_default(DEFAULT_FILTER)
}

/// Like [`init`], with a custom fallback directive.
pub fn init_with_default(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Trace-level log under the core target.
#[macro_export]
macro_rules! cardshell_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "cardshell_core", $($arg)*)
    };
}

/// Debug-level log under the core target.
#[macro_export]
macro_rules! cardshell_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "cardshell_core", $($arg)*)
    };
}
