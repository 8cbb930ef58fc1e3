//! Percent normalization.
//!
//! Phase allocations may be typed as `30` or `0.30`. Any value above `1.0` is
//! read as a percentage and divided by 100; anything else is already a
//! fraction.

use rust_decimal::Decimal;

use crate::models::{LenientNumber, PhaseAllocation, RoleEntry};

/// Converts a value that may be a fraction or a percentage into a fraction.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::calculation::percent_to_fraction;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percent_to_fraction(Decimal::from(30)), Decimal::new(30, 2));
/// assert_eq!(percent_to_fraction(Decimal::new(30, 2)), Decimal::new(30, 2));
/// assert_eq!(percent_to_fraction(Decimal::ONE), Decimal::ONE);
/// ```
pub fn percent_to_fraction(value: Decimal) -> Decimal {
    if value > Decimal::ONE {
        value / Decimal::ONE_HUNDRED
    } else {
        value
    }
}

/// Normalizes a raw cell to a fraction. Unparsable cells are zero.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::calculation::normalize_percent;
/// use cm_cost_engine::models::LenientNumber;
/// use rust_decimal::Decimal;
///
/// assert_eq!(normalize_percent(&LenientNumber::from("45")), Decimal::new(45, 2));
/// assert_eq!(normalize_percent(&LenientNumber::from("lots")), Decimal::ZERO);
/// ```
pub fn normalize_percent(value: &LenientNumber) -> Decimal {
    value
        .to_decimal()
        .map(percent_to_fraction)
        .unwrap_or(Decimal::ZERO)
}

/// Normalizes all three phase allocations of a roster entry.
pub fn normalize_allocation(entry: &RoleEntry) -> PhaseAllocation {
    PhaseAllocation {
        pre: normalize_percent(&entry.pre_pct),
        con: normalize_percent(&entry.con_pct),
        post: normalize_percent(&entry.post_pct),
    }
}
