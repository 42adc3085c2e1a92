//! Variance percentage calculation
//!
//! Formats the deviation of actual revenue from its target as a signed
//! percentage string for the variance table.

use rust_decimal::prelude::*;

use crate::report::money::to_decimal;

/// Marker returned when target and actual are both zero
pub const NO_CHANGE: &str = "+0%";

/// Marker returned when there is no target to compare against
pub const NOT_APPLICABLE: &str = "N/A";

/// Variance rounding (one decimal place, half away from zero)
const VARIANCE_PLACES: u32 = 1;

/// Calculate the variance percentage of `actual` against `target`
///
/// A zero target has no meaningful percentage: both-zero yields
/// [`NO_CHANGE`], a nonzero actual yields [`NOT_APPLICABLE`]. This mirrors
/// how the reconciliation dashboard has always treated unset targets and is
/// deliberate, not a gap. Everything else is `(actual - target) / target *
/// 100`, rounded to one decimal place and rendered with an explicit sign
/// ("+3.0%", "-7.1%").
pub fn variance_percentage(actual: f64, target: f64) -> String {
    if target == 0.0 {
        let marker = if actual == 0.0 { NO_CHANGE } else { NOT_APPLICABLE };
        return marker.to_string();
    }

    // Targets outside Decimal resolution convert to zero; they have no
    // meaningful percentage either
    let target_dec = to_decimal(target);
    if target_dec.is_zero() {
        return NOT_APPLICABLE.to_string();
    }

    let variance = (to_decimal(actual) - target_dec) / target_dec * Decimal::ONE_HUNDRED;
    let rounded = variance
        .round_dp_with_strategy(VARIANCE_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: a Decimal rounded to 1dp is always within f64 representable range
        .expect("Decimal rounded to 1dp is always representable as f64");

    if rounded >= 0.0 {
        // abs() keeps a rounded -0.0 from rendering as "-0.0%"
        format!("+{:.1}%", rounded.abs())
    } else {
        format!("{:.1}%", rounded)
    }
}
