//! Confidence estimation: how completely the expected schema was populated.

use crate::attribute::AttributeBag;
use crate::schema::SCHEMA;

/// Fraction of expected schema keys carrying a present value, clamped to
/// [0, 1] and rounded to two decimals.
///
/// Rounding is half-away-from-zero (`f64::round` on the scaled ratio), so
/// a ratio landing exactly on a 0.005 boundary rounds up. Keys outside the
/// schema never enter the ratio. A zero-key schema defines confidence as
/// 0.0 rather than dividing by zero.
pub fn confidence(bag: &AttributeBag) -> f64 {
    let populated = SCHEMA
        .iter()
        .filter(|spec| bag.is_populated(spec.key))
        .count();
    ratio_of(populated, SCHEMA.len())
}

pub(crate) fn ratio_of(populated: usize, expected: usize) -> f64 {
    if expected == 0 {
        return 0.0;
    }
    let ratio = (populated as f64 / expected as f64).clamp(0.0, 1.0);
    (ratio * 100.0).round() / 100.0
}
