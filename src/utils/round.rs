//! Rounding helpers that reproduce the dashboard's number formatting.
//!
//! Two distinct behaviours are needed:
//! - `round_cents` scales first and rounds the (already inexact) product, the way
//!   `Math.round(x * 100) / 100` does.
//! - `round_fixed` rounds the exact binary value of `x` to `digits` decimals with
//!   ties going away from zero, the way `Number.prototype.toFixed` does. `1.45`
//!   is stored as `1.4499999…` and therefore becomes `1.4`, while `0.75` is exact
//!   and becomes `0.8`.

/// Extra digits printed past the rounding position; far below any f64 ulp we handle.
const GUARD_DIGITS: usize = 40;

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round_fixed(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Rust prints the exact decimal expansion when asked for enough precision.
    let exact = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (head, tail) = exact.split_at(exact.len() - GUARD_DIGITS);
    let digits_only: String = head.chars().filter(char::is_ascii_digit).collect();

    let Ok(mut scaled) = digits_only.parse::<u128>() else {
        return value;
    };
    if tail.as_bytes().first().is_some_and(|d| *d >= b'5') {
        scaled += 1;
    }

    let rounded = scaled as f64 / 10f64.powi(digits as i32);
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

/// `round_fixed(value, 0)` as an integer; used for percentages.
pub(crate) fn round_percent(value: f64) -> i64 {
    round_fixed(value, 0) as i64
}
