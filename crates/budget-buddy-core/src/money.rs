//! Currency conversion between wire values and stored minor units.
//!
//! Amounts travel as `f64` major units (dollars) and are stored as `i64`
//! minor units (cents).

use serde_json::Value;

/// 2^63, the first magnitude an `i64` cannot hold.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Convert a major-unit amount to minor units, rounding to the nearest cent.
///
/// Returns `None` when the rounded cents do not fit in an `i64`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_minor_units(amount: f64) -> Option<i64> {
    let cents = (amount * 100.0).round();
    (-I64_BOUND..I64_BOUND)
        .contains(&cents)
        .then(|| cents as i64)
}

/// Convert minor units back to a major-unit amount.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_major_units(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Read a JSON value as a finite number.
///
/// Accepts JSON numbers and strings holding a number (surrounding whitespace
/// allowed). Everything else, including booleans, `null`, `NaN` and infinities,
/// yields `None`.
#[must_use]
pub fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
