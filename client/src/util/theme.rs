//! Theme persistence and the `data-theme` attribute.
//!
//! Reads the stored preference from `localStorage` and mirrors the active
//! theme onto the `<html>` element. Toggle writes the new value back. Outside
//! a browser every function is a no-op apart from computing the next theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;
use crate::util::storage;

/// Attribute on `<html>` that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Read the stored theme; light when nothing usable is stored.
pub fn read_preference(storage_key: &str) -> Theme {
    Theme::from_stored(storage::load_item(storage_key).as_deref())
}

/// Set `data-theme` on the document element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(err) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                log::warn!("failed to apply theme: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to the other theme, apply it, and persist it.
pub fn toggle(storage_key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save_item(storage_key, next.as_str());
    next
}
