//! Pausing background activity while the app is not in front.
//!
//! When the main window loses focus to another application, sound and any
//! hosted match should stop; they resume once the window is activated
//! again. [`PauseHook`] fans those two calls out to registered
//! [`Pausable`] targets and swallows repeats, since focus events often
//! arrive twice.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use cardshell_core::logging::targets;

/// Something that can be paused while the app is in the background.
pub trait Pausable {
    /// Stop activity.
    fn pause(&self);

    /// Restart activity.
    fn resume(&self);
}

/// Shared pause state with its targets.
#[derive(Default)]
pub struct PauseHook {
    targets: RefCell<Vec<Weak<dyn Pausable>>>,
    paused: Cell<bool>,
}

impl PauseHook {
    /// A hook with no targets, not paused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target. The hook holds it weakly.
    pub fn register(&self, target: &Rc<dyn Pausable>) {
        self.targets.borrow_mut().push(Rc::downgrade(target));
    }

    /// Whether currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused.get()
    }

    /// Live targets.
    pub fn target_count(&self) -> usize {
        self.targets
            .borrow()
            .iter()
            .filter(|target| target.strong_count() > 0)
            .count()
    }

    /// Pause every target. Does nothing if already paused.
    pub fn pause(&self) {
        if self.paused.replace(true) {
            return;
        }
        tracing::debug!(target: targets::WINDOW, "pausing background activity");
        for target in self.live_targets() {
            target.pause();
        }
    }

    /// Resume every target. Does nothing unless paused.
    pub fn resume(&self) {
        if !self.paused.replace(false) {
            return;
        }
        tracing::debug!(target: targets::WINDOW, "resuming background activity");
        for target in self.live_targets() {
            target.resume();
        }
    }

    // Collect first so a target may register others while being called.
    fn live_targets(&self) -> Vec<Rc<dyn Pausable>> {
        let mut list = self.targets.borrow_mut();
        list.retain(|target| target.strong_count() > 0);
        list.iter().filter_map(Weak::upgrade).collect()
    }
}
