//! FAQ accordion.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::DomError;
use super::events::{has_class, icon_of, on, position_of, query_all, set_class, set_style, warn_on_err};
use crate::state::ACTIVE_CLASS;
use crate::state::accordion::{Accordion, IconHost};

pub const ITEM_SELECTOR: &str = ".faq-item";
pub const QUESTION_SELECTOR: &str = ".faq-question";

/// Wire each `.faq-question` to expand its parent `.faq-item`.
pub fn mount(document: &Document) -> Result<(), DomError> {
    let items = query_all(document, ITEM_SELECTOR)?;
    let questions = query_all(document, QUESTION_SELECTOR)?;
    if items.is_empty() || questions.is_empty() {
        return Ok(());
    }
    let initially_open = items.iter().position(|item| has_class(item, ACTIVE_CLASS));
    let faq = Rc::new(RefCell::new(Accordion::with_open(items.len(), initially_open)));
    let items = Rc::new(items);

    for question in &questions {
        let Some(index) = question.parent_element().and_then(|parent| position_of(&items, &parent)) else {
            log::debug!("faq question outside a {ITEM_SELECTOR}; skipped");
            continue;
        };
        let faq = Rc::clone(&faq);
        let items = Rc::clone(&items);
        let clicked = question.clone();
        on(question, "click", move |_| {
            faq.borrow_mut().toggle(index);
            sync(&items, &clicked, index, &faq.borrow());
        })?;
    }
    Ok(())
}

fn sync(items: &[Element], question: &Element, clicked: usize, faq: &Accordion) {
    for (index, item) in items.iter().enumerate() {
        warn_on_err("faq item", set_class(item, ACTIVE_CLASS, faq.is_open(index)));
    }
    for (index, host, transform) in faq.icon_plan(clicked) {
        let icon = match host {
            IconHost::Question => icon_of(question),
            IconHost::Item => items.get(index).and_then(icon_of),
        };
        if let Some(icon) = icon {
            warn_on_err("faq icon", set_style(&icon, "transform", transform));
        }
    }
}
