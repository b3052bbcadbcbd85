//! Add-user modal.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::DomError;
use super::events::{event_element, on, same_node, set_style, warn_on_err};
use crate::state::modal::Modal;

pub const OPEN_BUTTON_ID: &str = "add-user-btn";
pub const MODAL_ID: &str = "add-user-modal";
pub const CLOSE_BUTTON_IDS: [&str; 2] = ["close-modal", "cancel-modal"];

pub fn mount(document: &Document) -> Result<(), DomError> {
    let (Some(open_button), Some(backdrop)) =
        (document.get_element_by_id(OPEN_BUTTON_ID), document.get_element_by_id(MODAL_ID))
    else {
        return Ok(());
    };
    let modal = Rc::new(RefCell::new(Modal::default()));
    let backdrop = Rc::new(backdrop);

    let (state, el) = (Rc::clone(&modal), Rc::clone(&backdrop));
    on(&open_button, "click", move |_| {
        state.borrow_mut().open();
        render(&el, *state.borrow());
    })?;

    for id in CLOSE_BUTTON_IDS {
        let Some(button) = document.get_element_by_id(id) else {
            log::debug!("modal has no #{id}");
            continue;
        };
        let (state, el) = (Rc::clone(&modal), Rc::clone(&backdrop));
        on(&button, "click", move |_| close(&el, &state))?;
    }

    // Clicks on the dialog itself bubble up; only the backdrop closes.
    let el = Rc::clone(&backdrop);
    on(&backdrop, "click", move |event| {
        if event_element(&event).is_some_and(|target| same_node(&target, &el)) {
            close(&el, &modal);
        }
    })
}

fn close(backdrop: &Element, modal: &RefCell<Modal>) {
    modal.borrow_mut().close();
    render(backdrop, *modal.borrow());
}

fn render(backdrop: &Element, modal: Modal) {
    warn_on_err("modal", set_style(backdrop, "display", modal.display()));
}
