//! Dashboard sidebar and tab switching.
//!
//! Tab links live in `.sidebar-menu` and name their panel in `data-tab`.
//! Only in-page links (`href` starting with `#`) switch tabs; anything else,
//! such as a logout link, is left to the browser.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Default viewport width at or below which choosing a tab closes the
/// slide-in sidebar.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Slide-in sidebar with its dimming overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    #[must_use]
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }
}

/// Attributes of one tab link as read from markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabLink {
    pub href: Option<String>,
    pub tab_id: String,
}

impl TabLink {
    /// Whether clicking this link should switch tabs instead of navigating.
    #[must_use]
    pub fn is_in_page(&self) -> bool {
        self.href.as_deref().is_some_and(|href| href.starts_with('#'))
    }
}

/// What the DOM binder must do after a tab link click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSwitch {
    /// Index of the link to mark active.
    pub link: usize,
    /// Id of the panel to show.
    pub panel_id: String,
    /// Whether to close the sidebar (narrow viewports).
    pub close_sidebar: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabSet {
    links: Vec<TabLink>,
    active: Option<usize>,
}

impl TabSet {
    #[must_use]
    pub fn new(links: Vec<TabLink>) -> Self {
        Self { links, active: None }
    }

    #[must_use]
    pub fn with_active(links: Vec<TabLink>, active: Option<usize>) -> Self {
        let active = active.filter(|i| *i < links.len());
        Self { links, active }
    }

    /// Handle a click on link `index` with the current viewport width.
    ///
    /// Returns `None` when the click should fall through to normal
    /// navigation.
    pub fn click(&mut self, index: usize, viewport_width: f64, breakpoint_px: f64) -> Option<TabSwitch> {
        let link = self.links.get(index)?;
        if !link.is_in_page() {
            return None;
        }
        self.active = Some(index);
        Some(TabSwitch { link: index, panel_id: link.tab_id.clone(), close_sidebar: viewport_width <= breakpoint_px })
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
