//! Full estimate pipeline.
//!
//! Runs every calculation over one input snapshot: costs, budget markups,
//! ROM fee, proposal coverage, allocation warnings and the plain-language
//! interpretation shown next to the coverage table. The pipeline holds no
//! state; the same input always yields the same estimate.

use rust_decimal::Decimal;

use crate::models::{
    Assumptions, CoverageRow, CoverageStatus, Estimate, EstimateInput, EstimateTotals,
    Interpretation, InterpretationLevel, ProposalTier,
};

use super::{allocation_warnings, budget_markups, compute_costs, evaluate_proposals, required_fee};

/// Shown when overhead and profit leave no revenue to recover payroll.
pub const MARKUPS_TOO_HIGH: &str = "Overhead% + Profit% must be less than 100% to compute ROM fee.";
/// Shown before any payroll cost has been entered.
pub const ENTER_TEAM: &str = "Enter team and durations to compute payroll cost.";
/// Mid proposal below payroll cost.
pub const MID_BELOW_PAYROLL: &str = "Mid proposal does not cover payroll cost (below 100%).";
/// Mid proposal at or above payroll cost.
pub const MID_COVERS_PAYROLL: &str = "Mid proposal covers payroll cost (≥ 100%).";
/// Mid proposal below the required fee.
pub const MID_BELOW_ROM: &str =
    "Mid proposal is below ROM required fee (overhead/profit not fully covered).";
/// Mid proposal at or above the required fee.
pub const MID_MEETS_ROM: &str =
    "Mid proposal meets/exceeds ROM required fee (covers payroll + overhead + profit).";

/// Computes a complete estimate from one input snapshot.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::calculation::estimate;
/// use cm_cost_engine::models::{Assumptions, EstimateInput, PhaseDurations, RoleEntry};
/// use rust_decimal::Decimal;
///
/// let input = EstimateInput {
///     roster: vec![RoleEntry::new("CM", 30, 30, 30, 100_000)],
///     phase_weeks: PhaseDurations::new(Decimal::from(26), Decimal::from(26), Decimal::ZERO),
///     assumptions: Assumptions::from_percent_points(Decimal::from(15), Decimal::ZERO, Decimal::ZERO),
///     ..Default::default()
/// };
///
/// let result = estimate(&input);
/// assert_eq!(result.totals.total_payroll_cost, Decimal::from(34_500));
/// assert_eq!(result.totals.rom_fee, Some(Decimal::from(34_500)));
/// ```
pub fn estimate(input: &EstimateInput) -> Estimate {
    let assumptions = &input.assumptions;

    let costs = compute_costs(&input.roster, &input.phase_weeks, assumptions.burden_pct);
    let total_payroll_cost = costs.total_payroll_cost;

    let markups = budget_markups(
        input.project_budget,
        assumptions.overhead_pct,
        assumptions.profit_pct,
    );
    let total_fee = markups.total_fee(total_payroll_cost);
    let rom_fee = required_fee(
        total_payroll_cost,
        assumptions.overhead_pct,
        assumptions.profit_pct,
    );

    let coverage = evaluate_proposals(&input.proposals, total_payroll_cost, total_fee);
    let totals = EstimateTotals {
        total_payroll_cost,
        overhead_dollars: markups.overhead_dollars,
        profit_dollars: markups.profit_dollars,
        total_fee,
        rom_fee,
    };
    let interpretation = interpret(assumptions, &totals, &coverage);

    Estimate {
        costs,
        totals,
        coverage,
        warnings: allocation_warnings(&input.roster),
        interpretation,
    }
}

/// Reads the Mid proposal's coverage back as plain-language messages.
pub fn interpret(
    assumptions: &Assumptions,
    totals: &EstimateTotals,
    coverage: &[CoverageRow],
) -> Vec<Interpretation> {
    let mut messages = Vec::new();

    if assumptions.revenue_remainder() <= Decimal::ZERO {
        messages.push(Interpretation::new(
            InterpretationLevel::Error,
            MARKUPS_TOO_HIGH,
        ));
    }

    if totals.total_payroll_cost <= Decimal::ZERO {
        messages.push(Interpretation::new(InterpretationLevel::Info, ENTER_TEAM));
        return messages;
    }

    let mid = coverage.iter().find(|row| row.proposal == ProposalTier::Mid);

    let mid_below_payroll = mid.is_some_and(|row| row.payroll_status == CoverageStatus::Below);
    messages.push(if mid_below_payroll {
        Interpretation::new(InterpretationLevel::Warning, MID_BELOW_PAYROLL)
    } else {
        Interpretation::new(InterpretationLevel::Success, MID_COVERS_PAYROLL)
    });

    if totals.rom_fee.is_some() {
        let mid_below_fee = mid.is_some_and(|row| row.fee_status == CoverageStatus::Below);
        messages.push(if mid_below_fee {
            Interpretation::new(InterpretationLevel::Warning, MID_BELOW_ROM)
        } else {
            Interpretation::new(InterpretationLevel::Success, MID_MEETS_ROM)
        });
    }

    messages
}
