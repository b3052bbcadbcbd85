//! Dashboard sidebar, overlay, and tab panels.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::DomError;
use super::events::{has_class, on, query_all, set_class, set_style, warn_on_err};
use crate::config::PageConfig;
use crate::state::ACTIVE_CLASS;
use crate::state::dashboard::{Sidebar, TabLink, TabSet, TabSwitch};

pub const SIDEBAR_SELECTOR: &str = ".sidebar";
pub const OVERLAY_SELECTOR: &str = ".sidebar-overlay";
pub const SIDEBAR_TOGGLE_ID: &str = "sidebar-toggle";
pub const TAB_LINK_SELECTOR: &str = ".sidebar-menu a[data-tab]";
pub const TAB_PANEL_SELECTOR: &str = ".tab-content";
pub const FADE_IN_CLASS: &str = "animate-fade-in";

/// Sidebar element, its optional overlay, and their shared open state.
struct SidebarChrome {
    sidebar: Element,
    overlay: Option<Element>,
    state: RefCell<Sidebar>,
}

impl SidebarChrome {
    fn sync(&self) {
        let open = self.state.borrow().is_open();
        warn_on_err("sidebar", set_class(&self.sidebar, ACTIVE_CLASS, open));
        if let Some(overlay) = &self.overlay {
            warn_on_err("sidebar overlay", set_class(overlay, ACTIVE_CLASS, open));
        }
    }

    fn close(&self) {
        self.state.borrow_mut().close();
        self.sync();
    }
}

pub fn mount(document: &Document, config: &PageConfig) -> Result<(), DomError> {
    let chrome = match document.query_selector(SIDEBAR_SELECTOR)? {
        Some(sidebar) => {
            let open = has_class(&sidebar, ACTIVE_CLASS);
            let overlay = document.query_selector(OVERLAY_SELECTOR)?;
            Some(Rc::new(SidebarChrome { sidebar, overlay, state: RefCell::new(Sidebar::with_open(open)) }))
        }
        None => None,
    };

    if let (Some(chrome), Some(toggle)) = (&chrome, document.get_element_by_id(SIDEBAR_TOGGLE_ID)) {
        mount_sidebar_toggle(chrome, &toggle)?;
    }
    mount_tabs(document, config.mobile_breakpoint_px, chrome)
}

fn mount_sidebar_toggle(chrome: &Rc<SidebarChrome>, toggle: &Element) -> Result<(), DomError> {
    let on_toggle = Rc::clone(chrome);
    on(toggle, "click", move |_| {
        on_toggle.state.borrow_mut().toggle();
        on_toggle.sync();
    })?;

    if let Some(overlay) = &chrome.overlay {
        let on_overlay = Rc::clone(chrome);
        on(overlay, "click", move |_| on_overlay.close())?;
    }
    Ok(())
}

fn mount_tabs(document: &Document, breakpoint_px: f64, chrome: Option<Rc<SidebarChrome>>) -> Result<(), DomError> {
    let links = query_all(document, TAB_LINK_SELECTOR)?;
    let panels = query_all(document, TAB_PANEL_SELECTOR)?;
    if links.is_empty() || panels.is_empty() {
        return Ok(());
    }

    let tab_links = links
        .iter()
        .map(|link| TabLink { href: link.get_attribute("href"), tab_id: link.get_attribute("data-tab").unwrap_or_default() })
        .collect::<Vec<_>>();
    let active = links.iter().position(|link| has_class(link, ACTIVE_CLASS));
    let tabs = Rc::new(RefCell::new(TabSet::with_active(tab_links, active)));
    let links = Rc::new(links);
    let panels = Rc::new(panels);

    for (index, link) in links.iter().enumerate() {
        let tabs = Rc::clone(&tabs);
        let links = Rc::clone(&links);
        let panels = Rc::clone(&panels);
        let chrome = chrome.clone();
        let document = document.clone();
        on(link, "click", move |event| {
            let Some(switch) = tabs.borrow_mut().click(index, viewport_width(), breakpoint_px) else {
                return;
            };
            event.prevent_default();
            warn_on_err("tab switch", show_tab(&document, &links, &panels, &switch));
            if switch.close_sidebar
                && let Some(chrome) = &chrome
            {
                chrome.close();
            }
        })?;
    }
    Ok(())
}

fn show_tab(document: &Document, links: &[Element], panels: &[Element], switch: &TabSwitch) -> Result<(), DomError> {
    for (index, link) in links.iter().enumerate() {
        set_class(link, ACTIVE_CLASS, index == switch.link)?;
    }
    for panel in panels {
        set_style(panel, "display", "none")?;
    }
    if let Some(panel) = document.get_element_by_id(&switch.panel_id) {
        set_style(&panel, "display", "block")?;
        set_class(&panel, FADE_IN_CLASS, true)?;
    }
    Ok(())
}

/// Current `innerWidth`; treated as wide when unavailable.
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY)
}
