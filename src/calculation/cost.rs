//! Loaded payroll cost calculation.
//!
//! Each role's compensation is loaded with payroll burden and multiplied by
//! the portion of a year the role spends on the project:
//!
//! ```text
//! loaded_annual         = compensation * (1 + burden)
//! project_year_fraction = pre% * pre_weeks/52 + con% * con_weeks/52 + post% * post_weeks/52
//! project_cost          = loaded_annual * project_year_fraction
//! ```
//!
//! The year fraction is not clamped; an over-allocated role (see
//! [`validate_rows`](super::validate_rows)) costs more than 100% of its time.
//! Arithmetic saturates at the `Decimal` range instead of overflowing.

use rust_decimal::Decimal;

use crate::models::{
    ComputedRole, CostBreakdown, PhaseDurations, PhaseFractions, RoleEntry,
};

use super::normalize_allocation;

/// Computes per-role project costs and the total payroll cost.
///
/// Unusable compensation or percentage cells count as zero. An empty roster
/// costs nothing.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::calculation::compute_costs;
/// use cm_cost_engine::models::{PhaseDurations, RoleEntry};
/// use rust_decimal::Decimal;
///
/// let roster = vec![RoleEntry::new("CM", 30, 30, 30, 100_000)];
/// let durations = PhaseDurations::new(Decimal::from(26), Decimal::from(26), Decimal::ZERO);
///
/// let costs = compute_costs(&roster, &durations, Decimal::new(15, 2));
/// assert_eq!(costs.roles[0].loaded_annual, Decimal::from(115_000));
/// assert_eq!(costs.total_payroll_cost, Decimal::from(34_500));
/// ```
pub fn compute_costs(
    roster: &[RoleEntry],
    durations: &PhaseDurations,
    burden_pct: Decimal,
) -> CostBreakdown {
    let phase_fractions = durations.year_fractions();
    let burden_factor = Decimal::ONE.saturating_add(burden_pct);

    let roles: Vec<ComputedRole> = roster
        .iter()
        .map(|entry| compute_role(entry, &phase_fractions, burden_factor))
        .collect();

    let total_payroll_cost = roles
        .iter()
        .fold(Decimal::ZERO, |total, role| {
            total.saturating_add(role.project_cost)
        });

    CostBreakdown {
        phase_fractions,
        roles,
        total_payroll_cost,
    }
}

fn compute_role(
    entry: &RoleEntry,
    fractions: &PhaseFractions,
    burden_factor: Decimal,
) -> ComputedRole {
    let total_compensation = entry.total_compensation.or_zero();
    let allocation = normalize_allocation(entry);

    let project_year_fraction = allocation
        .pre
        .saturating_mul(fractions.pre)
        .saturating_add(allocation.con.saturating_mul(fractions.con))
        .saturating_add(allocation.post.saturating_mul(fractions.post));
    let loaded_annual = total_compensation.saturating_mul(burden_factor);
    let project_cost = loaded_annual.saturating_mul(project_year_fraction);

    ComputedRole {
        name: entry.name.clone(),
        total_compensation,
        allocation,
        loaded_annual,
        project_year_fraction,
        project_cost,
    }
}
