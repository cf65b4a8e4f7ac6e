//! Worker pool for background jobs.
//!
//! Built on rayon. Jobs deliver their result to the UI thread through a
//! [`UiSender`]. The global pool runs blocking network and disk jobs, so it
//! is sized for I/O rather than for the number of CPU cores.
//!
//! ```no_run
//! use cardshell_core::marshal::UiChannel;
//! use cardshell_core::threadpool::ThreadPool;
//!
//! let pool = ThreadPool::global();
//! let results = UiChannel::new();
//!
//! pool.spawn_with_callback(|| 6 * 7, results.sender());
//!
//! // Later, on the UI thread:
//! for value in results.drain() {
//!     println!("got {value}");
//! }
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

use crate::error::{CoreError, Result};
use crate::logging::targets;
use crate::marshal::UiSender;

/// Global worker pool instance.
static GLOBAL_POOL: OnceLock<ThreadPool> = OnceLock::new();

/// Worker threads in the global pool.
///
/// Jobs there mostly wait on sockets, so there are far more threads than
/// cores.
pub const DEFAULT_IO_THREADS: usize = 64;

/// Configuration for a worker pool.
#[derive(Debug, Clone)]
pub struct ThreadPoolConfig {
    /// Number of worker threads. `None` means one per CPU core.
    pub num_threads: Option<usize>,
    /// Name prefix for worker threads.
    pub thread_name: String,
}

impl Default for ThreadPoolConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            thread_name: "cardshell-worker".to_string(),
        }
    }
}

impl ThreadPoolConfig {
    /// Configuration with a fixed thread count.
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: Some(num_threads),
            ..Default::default()
        }
    }

    /// Configuration for blocking I/O jobs.
    pub fn io() -> Self {
        Self {
            num_threads: Some(DEFAULT_IO_THREADS),
            thread_name: "cardshell-io".to_string(),
        }
    }
}

/// A pool of worker threads.
pub struct ThreadPool {
    pool: RayonThreadPool,
    active_tasks: Arc<AtomicUsize>,
}

impl ThreadPool {
    /// The lazily created global pool, built with [`ThreadPoolConfig::io`].
    ///
    /// # Panics
    ///
    /// Panics if the operating system refuses to start worker threads.
    pub fn global() -> &'static ThreadPool {
        GLOBAL_POOL.get_or_init(|| {
            ThreadPool::new(ThreadPoolConfig::io()).expect("Failed to create global thread pool")
        })
    }

    /// Create a pool.
    pub fn new(config: ThreadPoolConfig) -> Result<Self> {
        let name = config.thread_name;
        let mut builder =
            ThreadPoolBuilder::new().thread_name(move |index| format!("{name}-{index}"));

        if let Some(num_threads) = config.num_threads {
            builder = builder.num_threads(num_threads);
        }

        let pool = builder
            .build()
            .map_err(|e| CoreError::ThreadPoolCreation(e.to_string()))?;

        Ok(Self {
            pool,
            active_tasks: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Number of jobs queued or running.
    pub fn active_tasks(&self) -> usize {
        self.active_tasks.load(Ordering::Acquire)
    }

    /// Run a job and queue its result for the UI thread.
    ///
    /// A closed channel means the UI side is gone; the result is dropped.
    pub fn spawn_with_callback<F, T>(&self, task: F, callback: UiSender<T>)
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        self.active_tasks.fetch_add(1, Ordering::AcqRel);
        let active_tasks = self.active_tasks.clone();

        self.pool.spawn(move || {
            let result = task();
            if callback.send(result).is_err() {
                tracing::debug!(target: targets::THREADPOOL, "UI channel closed, dropping job result");
            }
            active_tasks.fetch_sub(1, Ordering::AcqRel);
        });
    }
}

impl std::fmt::Debug for ThreadPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadPool")
            .field("num_threads", &self.num_threads())
            .field("active_tasks", &self.active_tasks())
            .finish()
    }
}
