//! Add-user modal dialog.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modal {
    open: bool,
}

impl Modal {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Inline `display` value for the modal backdrop.
    #[must_use]
    pub fn display(self) -> &'static str {
        if self.open { "flex" } else { "none" }
    }
}
