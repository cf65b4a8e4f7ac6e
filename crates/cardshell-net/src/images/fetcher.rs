//! Request-coalescing image fetcher.
//!
//! All bookkeeping lives on the UI thread. A fetch either joins the download
//! already running for its destination file or starts one on the worker pool.
//! Workers only download and write; their results come back through a
//! [`UiChannel`] and observers are notified from
//! [`ImageFetcher::dispatch_completions`], again on the UI thread.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::time::Duration;

use cardshell_core::logging::{span_names, targets};
use cardshell_core::{ThreadAffinity, ThreadPool, UiChannel, UiWaker};
use image::{DynamicImage, ImageFormat};

use super::config::ImageCacheConfig;
use super::key::ImageKey;
use super::resolver::{CardDatabase, ImageLocation, ImageResolver};
use super::source::{HttpImageSource, ImageSource};
use super::token_index::TokenIndex;
use crate::error::{ImageError, Result};

/// Result of one download, as seen by observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The image is now cached at this path.
    Saved(PathBuf),
    /// The download failed; nothing was written.
    Failed(ImageError),
}

impl FetchOutcome {
    /// Whether the image was saved.
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// Receives the outcome of a fetch.
///
/// The fetcher holds observers weakly; dropping the last strong reference
/// silently unsubscribes.
pub trait ImageObserver {
    /// Called once per download this observer waited on, on the UI thread.
    fn image_fetched(&self, outcome: &FetchOutcome);
}

/// What [`ImageFetcher::fetch`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// A new download was submitted.
    Started,
    /// A download for the same file was already running; the observer was added to it.
    Joined,
}

struct Completion {
    destination: PathBuf,
    outcome: FetchOutcome,
}

enum PoolRef {
    Global,
    Owned(Arc<ThreadPool>),
}

impl PoolRef {
    fn get(&self) -> &ThreadPool {
        match self {
            Self::Global => ThreadPool::global(),
            Self::Owned(pool) => pool.as_ref(),
        }
    }
}

/// Downloads card and token images into the cache directories.
///
/// Not `Send`: create and use it on the UI thread.
pub struct ImageFetcher {
    resolver: ImageResolver,
    source: Arc<dyn ImageSource>,
    pool: PoolRef,
    requests: RefCell<HashMap<PathBuf, Vec<Weak<dyn ImageObserver>>>>,
    completions: UiChannel<Completion>,
    affinity: ThreadAffinity,
}

static_assertions::assert_not_impl_any!(ImageFetcher: Send, Sync);

impl ImageFetcher {
    /// Fetcher using HTTP and the global I/O pool.
    pub fn new(config: ImageCacheConfig, database: Rc<dyn CardDatabase>) -> Result<Self> {
        let source = HttpImageSource::new()?;
        Ok(Self::with_source(config, database, Arc::new(source)))
    }

    /// Fetcher using a custom transport.
    pub fn with_source(
        config: ImageCacheConfig,
        database: Rc<dyn CardDatabase>,
        source: Arc<dyn ImageSource>,
    ) -> Self {
        Self {
            resolver: ImageResolver::new(config, database),
            source,
            pool: PoolRef::Global,
            requests: RefCell::new(HashMap::new()),
            completions: UiChannel::new(),
            affinity: ThreadAffinity::current(),
        }
    }

    /// Run downloads on a dedicated pool instead of the global one.
    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = PoolRef::Owned(pool);
        self
    }

    /// Wake the event loop whenever a download finishes.
    ///
    /// Must be set before the first fetch.
    pub fn with_waker(mut self, waker: UiWaker) -> Self {
        debug_assert!(self.requests.get_mut().is_empty());
        self.completions = UiChannel::with_waker(waker);
        self
    }

    /// Use a preloaded token index.
    pub fn with_token_index(mut self, tokens: TokenIndex) -> Self {
        self.resolver = self.resolver.with_token_index(tokens);
        self
    }

    /// The key resolver.
    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    /// Request the image for `raw_key`.
    ///
    /// Keys that cannot be resolved are logged and returned as errors; the
    /// observer is never called for them.
    ///
    /// # Panics
    ///
    /// Panics if called from a thread other than the one that created the fetcher.
    pub fn fetch(&self, raw_key: &str, observer: &Rc<dyn ImageObserver>) -> Result<FetchStatus> {
        self.affinity.assert_same_thread_with_msg("ImageFetcher::fetch");

        let location = ImageKey::parse(raw_key).and_then(|key| self.resolver.resolve(&key));
        let ImageLocation { url, destination } = match location {
            Ok(location) => location,
            Err(err) => {
                tracing::warn!(target: targets::IMAGES, key = raw_key, error = %err, "cannot fetch image");
                return Err(err);
            }
        };

        let mut requests = self.requests.borrow_mut();
        if let Some(observers) = requests.get_mut(&destination) {
            let observer = Rc::downgrade(observer);
            if !observers.iter().any(|existing| existing.ptr_eq(&observer)) {
                observers.push(observer);
            }
            tracing::trace!(
                target: targets::IMAGES,
                key = raw_key,
                observers = observers.len(),
                "joined in-flight download"
            );
            return Ok(FetchStatus::Joined);
        }

        requests.insert(destination.clone(), vec![Rc::downgrade(observer)]);
        drop(requests);

        tracing::info!(target: targets::IMAGES, key = raw_key, %url, "attempting to fetch");
        let source = Arc::clone(&self.source);
        self.pool.get().spawn_with_callback(
            move || {
                let _span = tracing::debug_span!(target: targets::IMAGES, span_names::IMAGE_FETCH, %url).entered();
                let outcome = match download(source.as_ref(), &url, &destination) {
                    Ok(()) => {
                        tracing::info!(target: targets::IMAGES, path = %destination.display(), "saved image");
                        FetchOutcome::Saved(destination.clone())
                    }
                    Err(err) => {
                        tracing::error!(target: targets::IMAGES, %url, error = %err, "failed to download card image");
                        FetchOutcome::Failed(err)
                    }
                };
                Completion {
                    destination,
                    outcome,
                }
            },
            self.completions.sender(),
        );

        Ok(FetchStatus::Started)
    }

    /// Notify observers of every finished download. Returns the number of
    /// downloads completed.
    pub fn dispatch_completions(&self) -> usize {
        self.affinity
            .assert_same_thread_with_msg("ImageFetcher::dispatch_completions");
        let completions = self.completions.drain();
        let count = completions.len();
        for completion in completions {
            self.complete(completion);
        }
        count
    }

    /// Block up to `timeout` for at least one download, then dispatch
    /// everything finished so far.
    ///
    /// For callers without an event loop.
    pub fn wait_and_dispatch(&self, timeout: Duration) -> usize {
        self.affinity
            .assert_same_thread_with_msg("ImageFetcher::wait_and_dispatch");
        match self.completions.recv_timeout(timeout) {
            Some(first) => {
                self.complete(first);
                1 + self.dispatch_completions()
            }
            None => 0,
        }
    }

    fn complete(&self, completion: Completion) {
        // The record is removed before fan-out so an observer may re-fetch.
        let observers = self
            .requests
            .borrow_mut()
            .remove(&completion.destination)
            .unwrap_or_default();

        let mut notified = 0usize;
        for observer in observers.iter().filter_map(Weak::upgrade) {
            observer.image_fetched(&completion.outcome);
            notified += 1;
        }
        tracing::debug!(
            target: targets::IMAGES,
            path = %completion.destination.display(),
            notified,
            "download complete"
        );
    }

    /// Destinations with a download in flight.
    pub fn in_flight(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Whether a download into `destination` is in flight.
    pub fn is_in_flight(&self, destination: &Path) -> bool {
        self.requests.borrow().contains_key(destination)
    }

    /// Observers waiting on `destination`.
    pub fn observer_count(&self, destination: &Path) -> usize {
        self.requests
            .borrow()
            .get(destination)
            .map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for ImageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFetcher")
            .field("resolver", &self.resolver)
            .field("in_flight", &self.in_flight())
            .field("completions", &self.completions)
            .finish_non_exhaustive()
    }
}

/// Download, decode and store one image.
///
/// The file is written to `<destination>.tmp` and renamed into place, so
/// readers of the cache never see a partial image.
fn download(source: &dyn ImageSource, url: &str, destination: &Path) -> Result<()> {
    let bytes = source.fetch(url)?;
    let image = image::load_from_memory(&bytes)?;

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp = temp_path(destination);
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    if let Err(err) = rgb.save_with_format(&temp, ImageFormat::Jpeg) {
        let _ = fs::remove_file(&temp);
        return Err(err.into());
    }
    if let Err(err) = fs::rename(&temp, destination) {
        let _ = fs::remove_file(&temp);
        return Err(err.into());
    }
    Ok(())
}

fn temp_path(destination: &Path) -> PathBuf {
    let mut name = destination.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
