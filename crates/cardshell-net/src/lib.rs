//! Networking for cardshell.
//!
//! The only remote resource the shell needs is card art: [`images`] resolves
//! image keys to URLs, downloads them on the worker pool and writes them into
//! the local cache, coalescing concurrent requests for the same file.

mod error;
pub mod images;

pub use error::{ImageError, Result};
pub use images::{FetchOutcome, FetchStatus, ImageCacheConfig, ImageFetcher, ImageKey, ImageObserver};
