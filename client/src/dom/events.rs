//! Small web-sys helpers shared by the binders.

use js_sys::Object;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

use super::DomError;

/// Attach a page-lifetime listener.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    // Listeners are never removed; the closure must outlive this frame.
    cb.forget();
    Ok(())
}

/// All elements in `document` matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First `<i>` icon inside `el`, if any.
pub fn icon_of(el: &Element) -> Option<Element> {
    el.query_selector("i").ok().flatten()
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), DomError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Set an inline style property. Non-HTML elements are left alone.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), DomError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Identity comparison between two DOM nodes.
pub fn same_node(a: &Element, b: &Element) -> bool {
    Object::is(a.as_ref(), b.as_ref())
}

/// Index of `target` within `list`.
pub fn position_of(list: &[Element], target: &Element) -> Option<usize> {
    list.iter().position(|el| same_node(el, target))
}

/// The element an event was dispatched to, if it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Log a handler failure; handlers have no caller to propagate to.
pub fn warn_on_err(context: &str, result: Result<(), DomError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
