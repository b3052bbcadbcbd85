//! Mobile navigation toggle and dropdown menus.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// The hamburger menu that reveals `.nav-links` on small screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    /// Flip the menu and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Close icon while open, hamburger while closed.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        if self.open { "bx bx-x" } else { "bx bx-menu" }
    }
}

/// A set of dropdowns where at most one is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownGroup {
    count: usize,
    open: Option<usize>,
}

impl DropdownGroup {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count, open: None }
    }

    /// Start with `open` already expanded (ignored when out of range).
    #[must_use]
    pub fn with_open(count: usize, open: Option<usize>) -> Self {
        Self { count, open: open.filter(|i| *i < count) }
    }

    /// A dropdown's trigger link was clicked: close the others and toggle it.
    pub fn click_trigger(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    /// A click landed outside every dropdown.
    pub fn click_outside(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
