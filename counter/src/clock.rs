//! Monotonic clock abstraction.
//!
//! The animator reads the clock when a counter crosses the visibility
//! threshold; frame timestamps arrive separately through
//! [`crate::CounterAnimator::tick`]. Both must share one time base.

use std::cell::Cell;
use std::rc::Rc;

/// Source of monotonic milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle and pass
/// another into the animator.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start_ms: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    /// Move the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
