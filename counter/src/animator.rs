//! Counter animator: visibility gating plus the frame loop.
//!
//! DESIGN
//! ======
//! The animator never touches a document. It owns the countable models and
//! talks to the page through three injected collaborators:
//!
//! - [`RenderSink`] receives the text for every frame,
//! - [`VisibilityProvider`] starts and stops intersection observation,
//! - [`Clock`] stamps the moment a counter crosses the threshold.
//!
//! The host forwards intersection reports to [`CounterAnimator::on_visibility`]
//! and calls [`CounterAnimator::tick`] once per display frame for as long as it
//! returns [`FrameRequest::Continue`]. Tests drive the same loop with a
//! [`crate::ManualClock`] and explicit timestamps.
//!
//! Animations are never cancelled. A counter whose element leaves the page
//! keeps ticking until it settles.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use std::fmt;

use crate::clock::Clock;
use crate::config::{CounterConfig, InvalidTargetPolicy};
use crate::countable::{Countable, CounterState};
use crate::ease::progress;
use crate::error::CounterError;

/// Handle for a registered counter; indexes the animator's element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Output surface for counter text.
pub trait RenderSink {
    /// Replace the displayed text of `id`.
    fn render(&mut self, id: ElementId, text: &str);
}

/// Intersection observation control.
pub trait VisibilityProvider {
    /// Begin reporting intersection changes for `id`.
    fn observe(&mut self, id: ElementId);
    /// Stop reporting for `id`. Must be idempotent.
    fn unobserve(&mut self, id: ElementId);
}

/// Result of feeding one visibility report to the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityOutcome {
    /// The counter started animating; the host should schedule a frame.
    Started,
    /// The target was invalid under [`InvalidTargetPolicy::Skip`]; the suffix
    /// was rendered and the counter settled.
    Skipped,
    /// Below threshold, or the counter already started.
    Ignored,
}

/// Whether the host should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    Continue,
    Idle,
}

/// Drives every registered counter from Unobserved to Settled.
pub struct CounterAnimator<S, V, C> {
    config: CounterConfig,
    counters: Vec<Countable>,
    sink: S,
    visibility: V,
    clock: C,
}

impl<S: RenderSink, V: VisibilityProvider, C: Clock> CounterAnimator<S, V, C> {
    /// Create an animator with no registered counters.
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`CounterConfig::validate`].
    pub fn new(config: CounterConfig, sink: S, visibility: V, clock: C) -> Result<Self, CounterError> {
        config.validate()?;
        Ok(Self { config, counters: Vec::new(), sink, visibility, clock })
    }

    /// Register a counter and start observing it.
    ///
    /// `target_attr` is the raw target attribute (`None` when absent) and
    /// `initial_text` the element's text before any frame has been rendered.
    pub fn register(&mut self, target_attr: Option<&str>, initial_text: &str) -> ElementId {
        let id = ElementId(self.counters.len());
        self.counters.push(Countable::parse(target_attr, initial_text));
        self.visibility.observe(id);
        id
    }

    /// Feed one intersection report.
    ///
    /// The first report at or above the threshold starts the counter and
    /// unobserves it. Every other report is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::UnknownElement`] if `id` was never registered.
    pub fn on_visibility(&mut self, id: ElementId, ratio: f64) -> Result<VisibilityOutcome, CounterError> {
        let threshold = self.config.threshold;
        let policy = self.config.invalid_target;
        let counter = self.counters.get_mut(id.0).ok_or(CounterError::UnknownElement(id))?;

        let visible_enough = ratio >= threshold;
        if counter.state() != CounterState::Unobserved || !visible_enough {
            return Ok(VisibilityOutcome::Ignored);
        }

        if policy == InvalidTargetPolicy::Skip && !counter.has_valid_target() {
            counter.settle();
            self.visibility.unobserve(id);
            self.sink.render(id, counter.suffix());
            log::debug!("counter {id}: invalid target, rendering suffix only");
            return Ok(VisibilityOutcome::Skipped);
        }

        let now_ms = self.clock.now_ms();
        counter.start(now_ms);
        self.visibility.unobserve(id);
        log::debug!("counter {id}: started at {now_ms:.1} ms, target {}", counter.target());
        Ok(VisibilityOutcome::Started)
    }

    /// Render one frame for every animating counter at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> FrameRequest {
        let duration_ms = self.config.duration_ms;
        let mut pending = false;

        for (index, counter) in self.counters.iter_mut().enumerate() {
            let CounterState::Animating { started_at_ms } = counter.state() else {
                continue;
            };
            let id = ElementId(index);
            let progress = progress(now_ms - started_at_ms, duration_ms);
            self.sink.render(id, &counter.text_at(progress));

            if progress >= 1.0 {
                counter.settle();
                log::debug!("counter {id}: settled");
            } else {
                pending = true;
            }
        }

        if pending { FrameRequest::Continue } else { FrameRequest::Idle }
    }

    /// [`CounterAnimator::tick`] at the injected clock's current reading.
    pub fn tick_now(&mut self) -> FrameRequest {
        let now_ms = self.clock.now_ms();
        self.tick(now_ms)
    }

    /// Whether any counter is mid-animation.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.counters.iter().any(|c| c.state().is_animating())
    }

    #[must_use]
    pub fn state(&self, id: ElementId) -> Option<CounterState> {
        self.counters.get(id.0).map(Countable::state)
    }

    #[must_use]
    pub fn countable(&self, id: ElementId) -> Option<&Countable> {
        self.counters.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn visibility(&self) -> &V {
        &self.visibility
    }
}
