//! FAQ accordion: one answer open at a time.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

const ICON_OPEN: &str = "rotate(180deg)";
const ICON_CLOSED: &str = "rotate(0deg)";

/// Where the chevron for an item is looked up after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconHost {
    /// The clicked `.faq-question`.
    Question,
    /// The whole `.faq-item`.
    Item,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    count: usize,
    open: Option<usize>,
}

impl Accordion {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count, open: None }
    }

    #[must_use]
    pub fn with_open(count: usize, open: Option<usize>) -> Self {
        Self { count, open: open.filter(|i| *i < count) }
    }

    /// A question was clicked: collapse every other item and flip this one.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    /// CSS transform for the chevron of item `index`.
    #[must_use]
    pub fn icon_transform(&self, index: usize) -> &'static str {
        if self.is_open(index) { ICON_OPEN } else { ICON_CLOSED }
    }

    /// Chevron updates after a click on `clicked`: the clicked item's icon is
    /// taken from its question, every other item's from the item itself.
    #[must_use]
    pub fn icon_plan(&self, clicked: usize) -> Vec<(usize, IconHost, &'static str)> {
        (0..self.count)
            .map(|index| {
                let host = if index == clicked { IconHost::Question } else { IconHost::Item };
                (index, host, self.icon_transform(index))
            })
            .collect()
    }
}
