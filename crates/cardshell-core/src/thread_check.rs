//! UI-thread affinity checks.
//!
//! Window chrome and image-cache bookkeeping live on a single logical UI
//! thread. Those types are not `Send`, so the compiler already keeps them
//! on the thread that built them; the checks here catch the remaining case
//! of a callback being invoked from the wrong place at runtime.
//!
//! ```
//! use cardshell_core::thread_check::ThreadAffinity;
//!
//! struct Registry {
//!     affinity: ThreadAffinity,
//! }
//!
//! impl Registry {
//!     fn touch(&self) {
//!         self.affinity.assert_same_thread_with_msg("Registry::touch");
//!     }
//! }
//!
//! Registry { affinity: ThreadAffinity::current() }.touch();
//! ```

use std::thread::ThreadId;

/// Records the thread an object was created on.
#[derive(Debug, Clone, Copy)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Bind to the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// The thread this affinity is bound to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Whether the caller runs on the bound thread.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Panics if called from another thread.
    #[inline]
    pub fn assert_same_thread(&self) {
        self.assert_same_thread_with_msg("object accessed from wrong thread")
    }

    /// Panics with `msg` if called from another thread.
    pub fn assert_same_thread_with_msg(&self, msg: &str) {
        if !self.is_same_thread() {
            self.panic_wrong_thread(msg);
        }
    }

    #[cold]
    #[inline(never)]
    fn panic_wrong_thread(&self, msg: &str) -> ! {
        let current = std::thread::current();
        panic!(
            "thread affinity violation: {msg}; bound to {:?}, called from \"{}\" ({:?})",
            self.thread_id,
            current.name().unwrap_or("<unnamed>"),
            current.id()
        )
    }
}
