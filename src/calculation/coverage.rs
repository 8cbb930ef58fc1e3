//! Fee proposal coverage.

use rust_decimal::Decimal;

use crate::models::{CoverageRow, CoverageStatus, FeeProposals};

/// Expresses a proposal as a percentage of a denominator.
///
/// Returns `None` when the denominator is zero or negative. That is distinct
/// from 0% coverage.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::calculation::coverage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coverage(Decimal::from(50_000), Decimal::from(100_000)), Some(Decimal::from(50)));
/// assert_eq!(coverage(Decimal::from(50_000), Decimal::ZERO), None);
/// ```
pub fn coverage(proposal: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator <= Decimal::ZERO {
        return None;
    }
    proposal
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

/// Evaluates every proposal against payroll cost and against total fee.
///
/// Rows come back in Low, Mid, High order.
pub fn evaluate_proposals(
    proposals: &FeeProposals,
    total_payroll_cost: Decimal,
    total_fee: Decimal,
) -> Vec<CoverageRow> {
    proposals
        .tiers()
        .into_iter()
        .map(|(proposal, fee)| {
            let payroll_coverage = coverage(fee, total_payroll_cost);
            let fee_coverage = coverage(fee, total_fee);
            CoverageRow {
                proposal,
                fee,
                payroll_coverage,
                payroll_status: CoverageStatus::from_coverage(payroll_coverage),
                fee_coverage,
                fee_status: CoverageStatus::from_coverage(fee_coverage),
            }
        })
        .collect()
}
