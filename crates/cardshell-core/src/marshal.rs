//! Delivery of worker results back onto the UI thread.
//!
//! A [`UiChannel`] is owned by the UI thread. Worker threads hold cloned
//! [`UiSender`]s; each send queues a value and pokes the optional
//! [`UiWaker`] so the event loop knows to drain the channel. Draining is the
//! only place queued values are observed, which keeps every mutation of
//! UI-owned state on one thread without locking it.
//!
//! ```
//! use cardshell_core::marshal::UiChannel;
//!
//! let channel = UiChannel::<u32>::new();
//! let sender = channel.sender();
//!
//! std::thread::spawn(move || sender.send(7).unwrap()).join().unwrap();
//!
//! assert_eq!(channel.drain(), vec![7]);
//! ```

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, unbounded};

use crate::error::{CoreError, Result};
use crate::thread_check::ThreadAffinity;

static_assertions::assert_impl_all!(UiSender<u32>: Send, Sync, Clone);

/// Wakes the UI event loop after a value has been queued.
///
/// With winit this is usually a closure around
/// `EventLoopProxy::send_event`.
pub type UiWaker = Arc<dyn Fn() + Send + Sync>;

/// Sending half of a [`UiChannel`], usable from any thread.
pub struct UiSender<T> {
    sender: Sender<T>,
    waker: Option<UiWaker>,
}

impl<T> Clone for UiSender<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            waker: self.waker.clone(),
        }
    }
}

impl<T> UiSender<T> {
    /// Queue a value for the UI thread.
    pub fn send(&self, value: T) -> Result<()> {
        self.sender.send(value).map_err(|_| CoreError::ChannelClosed)?;
        if let Some(waker) = &self.waker {
            waker();
        }
        Ok(())
    }
}

impl<T> std::fmt::Debug for UiSender<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiSender")
            .field("has_waker", &self.waker.is_some())
            .finish()
    }
}

/// Receiving half, bound to the thread that created it.
pub struct UiChannel<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
    waker: Option<UiWaker>,
    affinity: ThreadAffinity,
}

impl<T> Default for UiChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UiChannel<T> {
    /// Create a channel without a waker; the owner polls it.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            waker: None,
            affinity: ThreadAffinity::current(),
        }
    }

    /// Create a channel that invokes `waker` after every send.
    pub fn with_waker(waker: UiWaker) -> Self {
        Self {
            waker: Some(waker),
            ..Self::new()
        }
    }

    /// A sender for worker threads.
    pub fn sender(&self) -> UiSender<T> {
        UiSender {
            sender: self.sender.clone(),
            waker: self.waker.clone(),
        }
    }

    /// Number of queued values.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Take one queued value without blocking.
    pub fn try_recv(&self) -> Option<T> {
        self.affinity.assert_same_thread_with_msg("UiChannel::try_recv");
        match self.receiver.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Block up to `timeout` for one value.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<T> {
        self.affinity.assert_same_thread_with_msg("UiChannel::recv_timeout");
        match self.receiver.recv_timeout(timeout) {
            Ok(value) => Some(value),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Take everything queued so far.
    pub fn drain(&self) -> Vec<T> {
        self.affinity.assert_same_thread_with_msg("UiChannel::drain");
        self.receiver.try_iter().collect()
    }
}

impl<T> std::fmt::Debug for UiChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiChannel")
            .field("pending", &self.pending())
            .field("has_waker", &self.waker.is_some())
            .finish()
    }
}
