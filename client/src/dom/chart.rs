//! `updateChartCenter` global used by inline chart markup.

use counter::format::format_number;
use js_sys::Reflect;
use wasm_bindgen::{JsValue, closure::Closure};
use web_sys::Window;

use super::DomError;

pub const GLOBAL_NAME: &str = "updateChartCenter";
pub const VALUE_SELECTOR: &str = ".chart-value";
pub const LABEL_SELECTOR: &str = ".chart-label";

/// Write `value` and `title` into the center of chart `container_id`.
/// Missing containers or slots are skipped.
pub fn update_chart_center(container_id: &str, title: &str, value: &str) {
    let Some(container) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
    else {
        return;
    };
    if let Ok(Some(el)) = container.query_selector(VALUE_SELECTOR) {
        el.set_text_content(Some(value));
    }
    if let Ok(Some(el)) = container.query_selector(LABEL_SELECTOR) {
        el.set_text_content(Some(title));
    }
}

/// Expose [`update_chart_center`] as `window.updateChartCenter`.
pub fn install(window: &Window) -> Result<(), DomError> {
    let global = Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(|id: JsValue, title: JsValue, value: JsValue| {
        update_chart_center(&js_text(&id), &js_text(&title), &js_text(&value));
    });
    Reflect::set(window, &JsValue::from_str(GLOBAL_NAME), global.as_ref())?;
    global.forget();
    Ok(())
}

/// Coerce a string or number argument to text; anything else is empty.
fn js_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.as_f64().map(format_number))
        .unwrap_or_default()
}
