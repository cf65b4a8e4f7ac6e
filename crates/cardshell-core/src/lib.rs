//! Core systems for cardshell.
//!
//! Everything here is windowing-agnostic:
//!
//! - **Thread affinity**: [`thread_check`] keeps UI-owned state on one thread
//! - **Marshaling**: [`marshal::UiChannel`] carries worker results back to the UI thread
//! - **Worker pool**: [`threadpool::ThreadPool`] runs blocking jobs off the UI thread
//! - **Debouncing**: [`debounce::Debouncer`] collapses bursts of window events
//! - **OS detection**: [`os::Os`] picks platform-specific window rules once
//! - **Logging**: [`logging`] target names and subscriber setup
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use cardshell_core::Debouncer;
//!
//! let mut save = Debouncer::new(Duration::from_millis(750));
//! let start = Instant::now();
//! save.trigger(start);
//! save.trigger(start + Duration::from_millis(200));
//! assert!(!save.poll(start + Duration::from_millis(800)));
//! assert!(save.poll(start + Duration::from_millis(950)));
//! ```

pub mod debounce;
mod error;
pub mod logging;
pub mod marshal;
pub mod os;
pub mod thread_check;
pub mod threadpool;

pub use debounce::{Debouncer, OneShot};
pub use error::{CoreError, Result};
pub use marshal::{UiChannel, UiSender, UiWaker};
pub use os::Os;
pub use thread_check::ThreadAffinity;
pub use threadpool::{DEFAULT_IO_THREADS, ThreadPool, ThreadPoolConfig};
