//! Browser host for the stat counter animator.
//!
//! ARCHITECTURE
//! ============
//! One `IntersectionObserver` watches every `.stat-number`. Its callback feeds
//! reports into the shared [`counter::CounterAnimator`]; whenever a counter
//! starts and no frame is pending, a `requestAnimationFrame` chain begins and
//! runs `tick` until the animator reports idle. Element handles are indexed by
//! [`ElementId`], so the animator itself never sees a DOM node.

use std::cell::RefCell;
use std::rc::Rc;

use counter::{Clock, CounterAnimator, ElementId, FrameRequest, RenderSink, VisibilityOutcome, VisibilityProvider};
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Performance,
};

use super::DomError;
use super::events::{position_of, query_all};
use crate::config::PageConfig;

/// Writes frame text into the counter elements.
struct ElementSink {
    elements: Vec<HtmlElement>,
}

impl RenderSink for ElementSink {
    fn render(&mut self, id: ElementId, text: &str) {
        if let Some(el) = self.elements.get(id.0) {
            el.set_inner_text(text);
        }
    }
}

/// Observes and unobserves counter elements on one shared observer.
struct ObserverVisibility {
    observer: IntersectionObserver,
    elements: Vec<Element>,
}

impl ObserverVisibility {
    fn id_of(&self, target: &Element) -> Option<ElementId> {
        position_of(&self.elements, target).map(ElementId)
    }
}

impl VisibilityProvider for ObserverVisibility {
    fn observe(&mut self, id: ElementId) {
        if let Some(el) = self.elements.get(id.0) {
            self.observer.observe(el);
        }
    }

    fn unobserve(&mut self, id: ElementId) {
        if let Some(el) = self.elements.get(id.0) {
            self.observer.unobserve(el);
        }
    }
}

/// `performance.now()`, the same time base as animation frame timestamps.
struct PerformanceClock {
    performance: Option<Performance>,
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.as_ref().map_or_else(js_sys::Date::now, Performance::now)
    }
}

type DomAnimator = CounterAnimator<ElementSink, ObserverVisibility, PerformanceClock>;

struct CounterHost {
    animator: DomAnimator,
    frame_pending: bool,
}

type SharedHost = Rc<RefCell<Option<CounterHost>>>;

/// Register every counter element and start observing.
pub fn mount(document: &Document, config: &PageConfig) -> Result<(), DomError> {
    let elements = query_all(document, &config.counter_selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect::<Vec<_>>();
    if elements.is_empty() {
        return Ok(());
    }
    let window = web_sys::window().ok_or(DomError::NoWindow)?;

    // Filled in below; the observer only reports after this function returns.
    let host: SharedHost = Rc::new(RefCell::new(None));
    let host_for_cb = Rc::clone(&host);
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| handle_entries(&host_for_cb, &entries),
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.counter.threshold));
    let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    on_intersect.forget();

    let visibility =
        ObserverVisibility { observer, elements: elements.iter().map(|el| el.clone().unchecked_into::<Element>()).collect() };
    let clock = PerformanceClock { performance: window.performance() };
    let texts = elements.iter().map(HtmlElement::inner_text).collect::<Vec<_>>();
    let targets = elements
        .iter()
        .map(|el| el.get_attribute(&config.counter_target_attribute))
        .collect::<Vec<_>>();

    let mut animator = CounterAnimator::new(config.counter.clone(), ElementSink { elements }, visibility, clock)?;
    for (target, text) in targets.iter().zip(&texts) {
        animator.register(target.as_deref(), text);
    }
    log::debug!("stat counters: observing {}", animator.len());

    *host.borrow_mut() = Some(CounterHost { animator, frame_pending: false });
    Ok(())
}

fn handle_entries(host: &SharedHost, entries: &Array) {
    let schedule = {
        let mut guard = host.borrow_mut();
        let Some(state) = guard.as_mut() else {
            return;
        };
        let mut started = false;
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let Some(id) = state.animator.visibility().id_of(&entry.target()) else {
                continue;
            };
            match state.animator.on_visibility(id, entry.intersection_ratio()) {
                Ok(VisibilityOutcome::Started) => started = true,
                Ok(VisibilityOutcome::Skipped | VisibilityOutcome::Ignored) => {}
                Err(err) => log::warn!("stat counter: {err}"),
            }
        }
        let schedule = started && !state.frame_pending;
        if schedule {
            state.frame_pending = true;
        }
        schedule
    };
    if schedule {
        request_frame(host);
    }
}

fn request_frame(host: &SharedHost) {
    let host_for_cb = Rc::clone(host);
    let cb = Closure::once_into_js(move |now_ms: f64| on_frame(&host_for_cb, now_ms));
    let requested = web_sys::window()
        .ok_or(DomError::NoWindow)
        .and_then(|w| w.request_animation_frame(cb.unchecked_ref()).map_err(DomError::from));
    if let Err(err) = requested {
        log::warn!("stat counter: cannot schedule frame: {err}");
        if let Some(state) = host.borrow_mut().as_mut() {
            state.frame_pending = false;
        }
    }
}

fn on_frame(host: &SharedHost, now_ms: f64) {
    let request = {
        let mut guard = host.borrow_mut();
        let Some(state) = guard.as_mut() else {
            return;
        };
        let request = state.animator.tick(now_ms);
        state.frame_pending = request == FrameRequest::Continue;
        request
    };
    if request == FrameRequest::Continue {
        request_frame(host);
    }
}
