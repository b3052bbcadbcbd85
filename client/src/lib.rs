//! # client
//!
//! WASM behaviors for the marketing site and its dashboard: theme toggle,
//! mobile navigation, dropdowns, FAQ accordion, dashboard sidebar and tabs,
//! the add-user modal, the `updateChartCenter` global, and the scroll-triggered
//! stat counters driven by the `counter` crate.
//!
//! Widget state lives in [`state`] and is plain Rust; the `hydrate` feature
//! adds [`dom`], which binds that state to the server-rendered page.

pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    dom::boot();
}

/// Module export of [`dom::chart::update_chart_center`] for script callers
/// that import the package instead of using the window global.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = updateChartCenter)]
pub fn update_chart_center(container_id: &str, title: &str, value: &str) {
    dom::chart::update_chart_center(container_id, title, value);
}
