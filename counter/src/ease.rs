//! Linear progress and the quartic ease-out curve.

#[cfg(test)]
#[path = "ease_test.rs"]
mod ease_test;

use crate::consts::EASE_OUT_POWER;

/// Linear progress through an animation, clamped to `[0, 1]`.
///
/// A negative `elapsed_ms` (frame timestamp taken before the start timestamp)
/// maps to 0. A NaN elapsed time also maps to 0 so callers never render an
/// uninitialized frame.
#[must_use]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    let raw = elapsed_ms / duration_ms;
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
}

/// Quartic ease-out: `1 - (1 - p)^4`.
///
/// Monotonic non-decreasing on `[0, 1]`, with `f(0) = 0` and `f(1) = 1`.
#[must_use]
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(EASE_OUT_POWER)
}
