//! Countable element model.
//!
//! A countable element is a piece of text such as `99.9%` or `500+` paired
//! with a target attribute. The target is parsed once at registration and the
//! suffix is derived from the untouched initial text, so later frames never
//! feed animated output back into the model.

#[cfg(test)]
#[path = "countable_test.rs"]
mod countable_test;

use crate::ease::ease_out_quart;
use crate::format::{in_flight_text, settled_text};

/// Lifecycle of a countable element. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CounterState {
    /// Waiting for the first qualifying visibility report.
    #[default]
    Unobserved,
    /// Animating since `started_at_ms` on the host clock.
    Animating {
        /// Clock reading when the visibility threshold was crossed.
        started_at_ms: f64,
    },
    /// Final text rendered; never animates again.
    Settled,
}

impl CounterState {
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Settled)
    }
}

/// A numeric display surface and its animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Countable {
    target: f64,
    suffix: String,
    is_decimal: bool,
    state: CounterState,
}

impl Countable {
    /// Build a countable from a target value and an explicit suffix.
    #[must_use]
    pub fn new(target: f64, suffix: impl Into<String>) -> Self {
        Self { target, suffix: suffix.into(), is_decimal: has_fraction(target), state: CounterState::Unobserved }
    }

    /// Build a countable from the raw target attribute and the element's
    /// initial text. A missing attribute parses to NaN.
    #[must_use]
    pub fn parse(target_attr: Option<&str>, initial_text: &str) -> Self {
        let target = target_attr.map_or(f64::NAN, parse_float);
        Self::new(target, extract_suffix(initial_text))
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether in-flight frames show one decimal place.
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        self.is_decimal
    }

    #[must_use]
    pub fn state(&self) -> CounterState {
        self.state
    }

    /// `false` when the target attribute was missing or not a finite number.
    #[must_use]
    pub fn has_valid_target(&self) -> bool {
        self.target.is_finite()
    }

    /// Text for the given linear progress. Progress of 1 or more yields the
    /// exact target.
    #[must_use]
    pub fn text_at(&self, progress: f64) -> String {
        if progress >= 1.0 {
            return settled_text(self.target, &self.suffix);
        }
        let current = self.target * ease_out_quart(progress);
        in_flight_text(current, self.is_decimal, &self.suffix)
    }

    /// Move from Unobserved to Animating. Returns `false` in any other state.
    pub(crate) fn start(&mut self, now_ms: f64) -> bool {
        if self.state != CounterState::Unobserved {
            return false;
        }
        self.state = CounterState::Animating { started_at_ms: now_ms };
        true
    }

    pub(crate) fn settle(&mut self) {
        self.state = CounterState::Settled;
    }
}

fn has_fraction(value: f64) -> bool {
    // NaN and infinities have no integral value either.
    value % 1.0 != 0.0
}

/// Strip every ASCII digit and `.` from the initial text; what remains is
/// re-appended to each frame.
#[must_use]
pub fn extract_suffix(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit() && *c != '.').collect()
}

/// Parse the longest numeric prefix of `raw`, after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, or the literal `Infinity`. Anything else yields NaN. Trailing
/// garbage after a valid prefix is ignored, so `"12k"` parses as 12.
#[must_use]
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let mut scan = Scanner { bytes: s.as_bytes(), pos: 0 };

    let negative = scan.peek() == Some(b'-');
    scan.eat(|b| b == b'+' || b == b'-');
    if s.get(scan.pos..).is_some_and(|rest| rest.starts_with("Infinity")) {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let mut digits = scan.eat_digits();
    let mut end = scan.pos;
    if scan.eat(|b| b == b'.') {
        digits += scan.eat_digits();
        if digits > 0 {
            end = scan.pos;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    scan.pos = end;
    if scan.eat(|b| b == b'e' || b == b'E') {
        scan.eat(|b| b == b'+' || b == b'-');
        if scan.eat_digits() > 0 {
            end = scan.pos;
        }
    }

    // `end` always sits on an ASCII boundary, so `get` only fails on a bug.
    match s.get(..end).map(str::parse::<f64>) {
        Some(Ok(value)) => value,
        _ => f64::NAN,
    }
}

/// Byte cursor over ASCII numeric text; every read is bounds-checked.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Scanner<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consume one byte if it matches.
    fn eat(&mut self, accept: impl Fn(u8) -> bool) -> bool {
        if self.peek().is_some_and(accept) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a run of ASCII digits and return its length.
    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while self.eat(|b| b.is_ascii_digit()) {}
        self.pos - start
    }
}
