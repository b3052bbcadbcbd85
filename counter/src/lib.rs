//! Visibility-triggered counter animation for numeric page statistics.
//!
//! This crate owns the logic behind the "stat number" counters: parsing the
//! target value and suffix from markup, deciding when an element has become
//! visible enough to start, and producing the eased text for every frame until
//! the counter settles on its exact target. It has no browser dependency; the
//! host (the `client` crate) supplies a [`animator::RenderSink`], a
//! [`animator::VisibilityProvider`] and a [`clock::Clock`], then feeds
//! intersection reports and frame timestamps into the animator.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`animator`] | The per-element state machine and frame loop |
//! | [`countable`] | Countable element model: target, suffix, state |
//! | [`ease`] | Progress and quartic ease-out curve |
//! | [`format`] | Display text for in-flight and settled values |
//! | [`config`] | Tunables (duration, threshold, invalid-target policy) |
//! | [`clock`] | Monotonic clock abstraction and a manual test clock |
//! | [`error`] | Error type shared by the crate |
//! | [`consts`] | Default numeric constants |

pub mod animator;
pub mod clock;
pub mod config;
pub mod consts;
pub mod countable;
pub mod ease;
pub mod error;
pub mod format;

pub use animator::{CounterAnimator, ElementId, FrameRequest, RenderSink, VisibilityOutcome, VisibilityProvider};
pub use clock::{Clock, ManualClock};
pub use config::{CounterConfig, InvalidTargetPolicy};
pub use countable::{Countable, CounterState};
pub use error::CounterError;
