//! Mobile menu toggle and dropdown menus.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::DomError;
use super::events::{event_element, has_class, icon_of, on, query_all, set_class, warn_on_err};
use crate::state::ACTIVE_CLASS;
use crate::state::nav::{DropdownGroup, MobileMenu};

pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const DROPDOWN_SELECTOR: &str = ".dropdown";

/// Wire `#menu-toggle` to show and hide `.nav-links`.
pub fn mount_menu(document: &Document) -> Result<(), DomError> {
    let (Some(button), Some(links)) =
        (document.get_element_by_id(MENU_TOGGLE_ID), document.query_selector(NAV_LINKS_SELECTOR)?)
    else {
        log::debug!("no mobile menu on this page");
        return Ok(());
    };
    let icon = icon_of(&button);
    let menu = Rc::new(RefCell::new(MobileMenu::with_open(has_class(&links, ACTIVE_CLASS))));

    on(&button, "click", move |_| {
        let open = menu.borrow_mut().toggle();
        warn_on_err("mobile menu", set_class(&links, ACTIVE_CLASS, open));
        if let Some(icon) = &icon {
            icon.set_class_name(menu.borrow().icon_class());
        }
    })
}

/// Wire every `.dropdown`: its first link toggles it, outside clicks close all.
pub fn mount_dropdowns(document: &Document) -> Result<(), DomError> {
    let dropdowns = query_all(document, DROPDOWN_SELECTOR)?;
    if dropdowns.is_empty() {
        return Ok(());
    }
    let initially_open = dropdowns.iter().position(|d| has_class(d, ACTIVE_CLASS));
    let group = Rc::new(RefCell::new(DropdownGroup::with_open(dropdowns.len(), initially_open)));
    let dropdowns = Rc::new(dropdowns);

    for (index, dropdown) in dropdowns.iter().enumerate() {
        let Some(trigger) = dropdown.query_selector("a")? else {
            continue;
        };
        let group = Rc::clone(&group);
        let all = Rc::clone(&dropdowns);
        on(&trigger, "click", move |event| {
            event.prevent_default();
            group.borrow_mut().click_trigger(index);
            sync(&all, &group.borrow());
        })?;
    }

    on(document, "click", move |event| {
        let inside = event_element(&event)
            .and_then(|el| el.closest(DROPDOWN_SELECTOR).ok().flatten())
            .is_some();
        if !inside {
            group.borrow_mut().click_outside();
            sync(&dropdowns, &group.borrow());
        }
    })
}

fn sync(dropdowns: &[Element], group: &DropdownGroup) {
    for (index, dropdown) in dropdowns.iter().enumerate() {
        warn_on_err("dropdown", set_class(dropdown, ACTIVE_CLASS, group.is_open(index)));
    }
}
