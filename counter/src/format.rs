//! Display text for counter values.
//!
//! In-flight frames use one decimal place for fractional targets and a floored
//! whole number otherwise. The settled frame prints the target itself so the
//! final text never carries easing error.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a number the way a page script would print it: integral values
/// without a decimal point, non-finite values as `NaN` / `Infinity`, and
/// magnitudes from `1e21` up or below `1e-6` in exponent form (`1e+21`,
/// `1e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_owned() } else { "-Infinity".to_owned() };
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || (magnitude > 0.0 && magnitude < EXPONENT_BELOW) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
            _ => text,
        };
    }
    // Adding +0.0 folds -0.0 into 0.0.
    format!("{}", value + 0.0)
}

const EXPONENT_ABOVE: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Render a number with exactly one decimal place.
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    // Exact halves (only multiples of 0.25 can be) round away from zero, as
    // `Number.prototype.toFixed` does; `{:.1}` alone would round them to even.
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    let value = if is_tie { (value * 10.0 + 0.5_f64.copysign(value)).trunc() / 10.0 } else { value };
    let rounded = format!("{:.1}", value + 0.0);
    // A small negative value can round to "-0.0".
    if rounded == "-0.0" { "0.0".to_owned() } else { rounded }
}

/// Text for a frame that is still animating.
#[must_use]
pub fn in_flight_text(current: f64, is_decimal: bool, suffix: &str) -> String {
    let number = if is_decimal { format_one_decimal(current) } else { format_number(current.floor()) };
    format!("{number}{suffix}")
}

/// Text for the final frame: the exact target followed by the suffix.
#[must_use]
pub fn settled_text(target: f64, suffix: &str) -> String {
    format!("{}{suffix}", format_number(target))
}
