//! Converted-amount formulas.

use crate::consts::MARK_UP;

/// `amount` converted at `rate`, less the markup percentage.
pub fn with_markup(amount: f64, rate: f64) -> f64 {
    amount * rate * (1.0 - MARK_UP / 100.0)
}

/// `amount` converted at the plain `rate`.
pub fn without_markup(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Display form used for converted amounts (four decimals).
pub fn format_converted(value: f64) -> String {
    format!("{value:.4}")
}
