//! Shared numeric constants for the counter crate.

// ── Timing ──────────────────────────────────────────────────────

/// Default animation length in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

// ── Visibility ──────────────────────────────────────────────────

/// Default fraction of an element's box that must intersect the viewport.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

// ── Easing ──────────────────────────────────────────────────────

/// Exponent of the ease-out curve (quartic).
pub const EASE_OUT_POWER: i32 = 4;
