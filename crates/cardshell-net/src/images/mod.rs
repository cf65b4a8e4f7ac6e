//! Card and token image fetching.
//!
//! # Example
//!
//! ```no_run
//! use std::rc::Rc;
//! use cardshell_net::images::{
//!     CardDatabase, FetchOutcome, ImageCacheConfig, ImageFetcher, ImageObserver, PaperCard,
//! };
//!
//! struct NoCards;
//!
//! impl CardDatabase for NoCards {
//!     fn card_for_key(&self, _id: &str) -> Option<PaperCard> { None }
//!     fn collector_number(&self, _name: &str, _edition: &str) -> Option<u32> { None }
//!     fn edition_short_code(&self, _edition: &str) -> Option<String> { None }
//!     fn fallback_image_url(&self, _card: &PaperCard, _back: bool) -> Option<String> { None }
//! }
//!
//! struct Thumbnail;
//!
//! impl ImageObserver for Thumbnail {
//!     fn image_fetched(&self, outcome: &FetchOutcome) {
//!         println!("{outcome:?}");
//!     }
//! }
//!
//! let config = ImageCacheConfig::from_cache_root("/tmp/cardshell");
//! let fetcher = ImageFetcher::new(config, Rc::new(NoCards))?;
//! let thumbnail: Rc<dyn ImageObserver> = Rc::new(Thumbnail);
//! fetcher.fetch("t:g_1_1_saproling", &thumbnail)?;
//!
//! // In the event loop, after being woken:
//! fetcher.dispatch_completions();
//! # Ok::<(), cardshell_net::ImageError>(())
//! ```

mod config;
mod fetcher;
mod key;
mod resolver;
mod source;
mod token_index;

pub use config::{DEFAULT_CARD_SCAN_BASE_URL, ImageCacheConfig};
pub use fetcher::{FetchOutcome, FetchStatus, ImageFetcher, ImageObserver};
pub use key::{BACKFACE_SUFFIX, CARD_PREFIX, ImageKey, TOKEN_PREFIX};
pub use resolver::{CardDatabase, ImageLocation, ImageResolver, PaperCard};
pub use source::{HttpImageSource, HttpSourceConfig, ImageSource};
pub use token_index::TokenIndex;
