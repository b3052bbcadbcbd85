//! `#theme-toggle` button.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::DomError;
use super::events::{icon_of, on};
use crate::config::PageConfig;
use crate::state::theme::Theme;
use crate::util::theme as theme_store;

pub const TOGGLE_ID: &str = "theme-toggle";

/// Apply the stored theme and wire the toggle button when present.
pub fn mount(document: &Document, config: &PageConfig) -> Result<(), DomError> {
    let key = config.theme_storage_key.clone();
    let theme = theme_store::read_preference(&key);
    theme_store::apply(theme);

    let Some(button) = document.get_element_by_id(TOGGLE_ID) else {
        log::debug!("no #{TOGGLE_ID}; theme applied without a toggle");
        return Ok(());
    };
    let icon = icon_of(&button);
    set_icon(icon.as_ref(), theme);

    let current = Rc::new(Cell::new(theme));
    on(&button, "click", move |_| {
        let next = theme_store::toggle(&key, current.get());
        current.set(next);
        set_icon(icon.as_ref(), next);
    })
}

fn set_icon(icon: Option<&Element>, theme: Theme) {
    if let Some(icon) = icon {
        icon.set_class_name(theme.icon_class());
    }
}
