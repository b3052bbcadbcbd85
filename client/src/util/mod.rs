//! Browser environment helpers shared by the DOM binders.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate storage and document-attribute access behind
//! functions that no-op outside the `hydrate` build, so callers stay
//! testable natively.

pub mod storage;
pub mod theme;
