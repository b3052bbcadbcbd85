#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// parse_float
// =============================================================

#[test]
fn parse_float_plain_numbers() {
    assert_eq!(parse_float("500"), 500.0);
    assert_eq!(parse_float("99.9"), 99.9);
    assert_eq!(parse_float("0"), 0.0);
}

#[test]
fn parse_float_skips_leading_whitespace() {
    assert_eq!(parse_float("  \n42"), 42.0);
}

#[test]
fn parse_float_takes_numeric_prefix() {
    assert_eq!(parse_float("12k"), 12.0);
    assert_eq!(parse_float("3.5.1"), 3.5);
    assert_eq!(parse_float("7e"), 7.0);
    assert_eq!(parse_float("1.5e3x"), 1500.0);
}

#[test]
fn parse_float_partial_fraction_forms() {
    assert_eq!(parse_float(".5"), 0.5);
    assert_eq!(parse_float("5."), 5.0);
    assert_eq!(parse_float("-2.25"), -2.25);
    assert_eq!(parse_float("+8"), 8.0);
}

#[test]
fn parse_float_infinity_literal() {
    assert_eq!(parse_float("Infinity"), f64::INFINITY);
    assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
}

#[test]
fn parse_float_rejects_non_numeric() {
    assert!(parse_float("").is_nan());
    assert!(parse_float("abc").is_nan());
    assert!(parse_float(".").is_nan());
    assert!(parse_float("-").is_nan());
    assert!(parse_float("$100").is_nan());
}

#[test]
fn parse_float_multibyte_text_does_not_panic() {
    assert_eq!(parse_float("\u{a0}7"), 7.0);
    assert_eq!(parse_float("5€"), 5.0);
    assert_eq!(parse_float("1.5×"), 1.5);
    assert!(parse_float("€5").is_nan());
    assert!(parse_float("\u{2212}5").is_nan());
    assert!(parse_float("+€").is_nan());
    assert!(parse_float("-Inf€").is_nan());
}

#[test]
fn parse_float_dangling_exponent_is_dropped() {
    assert_eq!(parse_float("5e"), 5.0);
    assert_eq!(parse_float("5e+"), 5.0);
    assert_eq!(parse_float("2.5E3k"), 2500.0);
}

// =============================================================
// extract_suffix
// =============================================================

#[test]
fn suffix_from_common_stat_texts() {
    assert_eq!(extract_suffix("99.9%"), "%");
    assert_eq!(extract_suffix("500+"), "+");
    assert_eq!(extract_suffix("12k"), "k");
    assert_eq!(extract_suffix("0"), "");
}

#[test]
fn suffix_keeps_every_non_numeric_character() {
    assert_eq!(extract_suffix("24/7"), "/");
    assert_eq!(extract_suffix("10 M+"), " M+");
}

// =============================================================
// Countable
// =============================================================

#[test]
fn parse_reads_target_and_suffix() {
    let c = Countable::parse(Some("99.9"), "0%");
    assert_eq!(c.target(), 99.9);
    assert_eq!(c.suffix(), "%");
    assert!(c.is_decimal());
    assert_eq!(c.state(), CounterState::Unobserved);
}

#[test]
fn integral_target_is_not_decimal() {
    let c = Countable::parse(Some("500"), "500+");
    assert!(!c.is_decimal());
    assert!(c.has_valid_target());
}

#[test]
fn missing_attribute_is_invalid() {
    let c = Countable::parse(None, "0+");
    assert!(c.target().is_nan());
    assert!(!c.has_valid_target());
    assert_eq!(c.suffix(), "+");
}

#[test]
fn text_at_start_is_zero() {
    assert_eq!(Countable::new(500.0, "+").text_at(0.0), "0+");
    assert_eq!(Countable::new(99.9, "%").text_at(0.0), "0.0%");
}

#[test]
fn text_at_completion_is_exact_target() {
    assert_eq!(Countable::new(99.9, "%").text_at(1.0), "99.9%");
    assert_eq!(Countable::new(500.0, "+").text_at(1.0), "500+");
}

#[test]
fn text_at_halfway_uses_eased_value() {
    // ease(0.5) = 0.9375; 500 * 0.9375 = 468.75
    assert_eq!(Countable::new(500.0, "+").text_at(0.5), "468+");
    // 10.5 * 0.9375 = 9.84375
    assert_eq!(Countable::new(10.5, "x").text_at(0.5), "9.8x");
}

#[test]
fn zero_target_renders_zero_throughout() {
    let c = Countable::new(0.0, "%");
    assert_eq!(c.text_at(0.0), "0%");
    assert_eq!(c.text_at(0.5), "0%");
    assert_eq!(c.text_at(1.0), "0%");
}

#[test]
fn start_only_from_unobserved() {
    let mut c = Countable::new(1.0, "");
    assert!(c.start(10.0));
    assert_eq!(c.state(), CounterState::Animating { started_at_ms: 10.0 });
    assert!(!c.start(20.0));
    c.settle();
    assert!(c.state().is_settled());
    assert!(!c.start(30.0));
}
