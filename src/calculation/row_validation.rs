//! Phase allocation validation.
//!
//! A role should not be allocated more than 100% of its time across the
//! three phases. Over-allocated rows are reported, not rejected or clamped:
//! they still compute and overstate cost.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{EstimateWarning, RoleEntry};

use super::normalize_allocation;

/// Allowed excess over 100% before a row is flagged.
pub const ALLOCATION_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Warning code for over-allocated rows.
pub const OVER_ALLOCATION_CODE: &str = "PHASE_OVER_ALLOCATED";

/// Checks each roster entry's phase allocations against the 100% ceiling.
///
/// Returns one message per over-allocated row, in roster order. Rows are
/// numbered from 1.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::calculation::validate_rows;
/// use cm_cost_engine::models::RoleEntry;
///
/// let roster = vec![
///     RoleEntry::new("CM", 30, 30, 40, 0),
///     RoleEntry::new("Site Manager", 10, 100, 100, 0),
/// ];
/// let warnings = validate_rows(&roster);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(
///     warnings[0],
///     "Row 2 (Site Manager): Pre+Con+Post = 210.0% (should be ≤ 100%)."
/// );
/// ```
pub fn validate_rows(roster: &[RoleEntry]) -> Vec<String> {
    roster
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let total = normalize_allocation(entry).total();
            if total > Decimal::ONE + ALLOCATION_TOLERANCE {
                let pct = total
                    .saturating_mul(Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
                Some(format!(
                    "Row {} ({}): Pre+Con+Post = {:.1}% (should be ≤ 100%).",
                    index + 1,
                    entry.display_name(),
                    pct
                ))
            } else {
                None
            }
        })
        .collect()
}

/// Wraps [`validate_rows`] messages as structured warnings.
pub fn allocation_warnings(roster: &[RoleEntry]) -> Vec<EstimateWarning> {
    validate_rows(roster)
        .into_iter()
        .map(|message| EstimateWarning {
            code: OVER_ALLOCATION_CODE.to_string(),
            message,
            severity: "medium".to_string(),
        })
        .collect()
}
