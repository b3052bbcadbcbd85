//! Pure widget state for the page behaviors.
//!
//! DESIGN
//! ======
//! Each widget keeps its open/active state here and derives the classes,
//! icons, and inline styles the DOM binders in `crate::dom` apply. Nothing in
//! this module touches the browser, so every transition is unit-tested
//! natively.

pub mod accordion;
pub mod dashboard;
pub mod modal;
pub mod nav;
pub mod theme;

/// Class toggled on open menus, dropdowns, accordion items, the sidebar, and
/// the active tab link.
pub const ACTIVE_CLASS: &str = "active";
