//! DOM binders: attach the widget state machines to the live page.
//!
//! ARCHITECTURE
//! ============
//! Each binder queries its elements once at mount time, keeps its widget state
//! in an `Rc<RefCell<..>>` shared by its event listeners, and re-applies
//! classes and styles from that state after every transition. Listeners live
//! for the page lifetime.
//!
//! Mounting never aborts the page. A binder whose elements are missing skips
//! itself; a binder that hits a JS error reports it and the rest still mount.

pub mod accordion;
pub mod chart;
pub mod dashboard;
pub mod events;
pub mod modal;
pub mod nav;
pub mod stats;
pub mod theme;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, DEFAULT_LOG_LEVEL, PageConfig};

/// Failure while wiring a widget.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("window is unavailable")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Counter(#[from] counter::CounterError),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Entry point: install globals now, mount widgets once the DOM is parsed.
pub fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = chart::install(&window) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("updateChartCenter: {err}")));
    }
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || start(&doc));
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            web_sys::console::warn_1(&err);
        }
    } else {
        start(&document);
    }
}

fn start(document: &Document) {
    let inline = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let loaded = PageConfig::from_inline(inline.as_deref());
    let config = loaded.as_ref().map_or_else(|_| PageConfig::default(), Clone::clone);
    init_logging(&config.log_level);
    if let Err(err) = loaded {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }
    mount_all(document, &config);
}

fn init_logging(level: &str) {
    let level = level
        .parse::<log::Level>()
        .or_else(|_| DEFAULT_LOG_LEVEL.parse::<log::Level>())
        .unwrap_or(log::Level::Info);
    // A logger may already be installed when the module is re-initialized.
    let _ = console_log::init_with_level(level);
}

/// Mount every widget, reporting failures without stopping.
pub fn mount_all(document: &Document, config: &PageConfig) {
    report("theme", theme::mount(document, config));
    report("mobile menu", nav::mount_menu(document));
    report("dropdowns", nav::mount_dropdowns(document));
    report("faq accordion", accordion::mount(document));
    report("dashboard", dashboard::mount(document, config));
    report("modal", modal::mount(document));
    report("stat counters", stats::mount(document, config));
}

fn report(widget: &str, result: Result<(), DomError>) {
    match result {
        Ok(()) => log::debug!("{widget}: mounted"),
        Err(err) => log::warn!("{widget}: {err}"),
    }
}
