//! Estimate input and result models.
//!
//! This module contains the [`EstimateInput`] snapshot fed into the engine and
//! the [`Estimate`] it produces: per-role costs, headline totals, coverage of
//! each fee proposal, allocation warnings and interpretation messages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    Assumptions, FeeProposals, PhaseAllocation, PhaseDurations, PhaseFractions, ProposalTier,
    RoleEntry,
};

/// Everything the engine needs for one recomputation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimateInput {
    /// The team roster, in display order.
    pub roster: Vec<RoleEntry>,
    /// Phase durations in weeks.
    pub phase_weeks: PhaseDurations,
    /// Burden, overhead and profit fractions.
    pub assumptions: Assumptions,
    /// Total project budget used to size overhead and profit dollars.
    pub project_budget: Decimal,
    /// The fee proposals to test.
    pub proposals: FeeProposals,
}

/// Derived cost figures for one roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedRole {
    /// The role name as entered.
    pub name: String,
    /// Compensation before burden (zero when the cell was unusable).
    pub total_compensation: Decimal,
    /// Normalized phase allocations.
    pub allocation: PhaseAllocation,
    /// Compensation inflated by payroll burden.
    pub loaded_annual: Decimal,
    /// Portion of a year the role spends on this project.
    pub project_year_fraction: Decimal,
    /// Loaded cost of the role over the project.
    pub project_cost: Decimal,
}

/// Per-role costs plus the total payroll cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Phase durations as fractions of a year.
    pub phase_fractions: PhaseFractions,
    /// Computed rows, in roster order.
    pub roles: Vec<ComputedRole>,
    /// Sum of every role's project cost.
    pub total_payroll_cost: Decimal,
}

/// Headline totals of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateTotals {
    /// Total cost of time (payroll).
    pub total_payroll_cost: Decimal,
    /// Overhead dollars against the project budget.
    pub overhead_dollars: Decimal,
    /// Profit dollars against the project budget.
    pub profit_dollars: Decimal,
    /// Payroll plus overhead and profit dollars.
    pub total_fee: Decimal,
    /// ROM required fee; `None` when overhead and profit consume all revenue.
    pub rom_fee: Option<Decimal>,
}

/// How a coverage percentage compares with full coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    /// Below 100%.
    Below,
    /// At or above 100%.
    Covered,
    /// Coverage has no result.
    Undefined,
}

impl CoverageStatus {
    /// Classifies a coverage percentage.
    ///
    /// # Examples
    ///
    /// ```
    /// use cm_cost_engine::models::CoverageStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(CoverageStatus::from_coverage(Some(Decimal::from(99))), CoverageStatus::Below);
    /// assert_eq!(CoverageStatus::from_coverage(Some(Decimal::from(100))), CoverageStatus::Covered);
    /// assert_eq!(CoverageStatus::from_coverage(None), CoverageStatus::Undefined);
    /// ```
    pub fn from_coverage(coverage: Option<Decimal>) -> Self {
        match coverage {
            None => CoverageStatus::Undefined,
            Some(pct) if pct < Decimal::ONE_HUNDRED => CoverageStatus::Below,
            Some(_) => CoverageStatus::Covered,
        }
    }
}

/// Coverage of one fee proposal against payroll cost and total fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRow {
    /// Which proposal this row describes.
    pub proposal: ProposalTier,
    /// The proposed fee.
    pub fee: Decimal,
    /// Percentage of payroll cost covered.
    pub payroll_coverage: Option<Decimal>,
    /// Status of the payroll coverage.
    pub payroll_status: CoverageStatus,
    /// Percentage of the total fee covered.
    pub fee_coverage: Option<Decimal>,
    /// Status of the fee coverage.
    pub fee_status: CoverageStatus,
}

/// A non-fatal issue found in the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// Tone of an interpretation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpretationLevel {
    /// Neutral guidance.
    Info,
    /// A proposal meets the threshold.
    Success,
    /// A proposal falls short.
    Warning,
    /// The inputs cannot produce a result.
    Error,
}

/// A plain-language reading of the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Tone of the message.
    pub level: InterpretationLevel,
    /// The message text.
    pub message: String,
}

impl Interpretation {
    /// Creates an interpretation message.
    pub fn new(level: InterpretationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// The complete result of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Per-role costs and total payroll.
    pub costs: CostBreakdown,
    /// Headline totals.
    pub totals: EstimateTotals,
    /// Coverage rows in Low, Mid, High order.
    pub coverage: Vec<CoverageRow>,
    /// Allocation warnings, in roster order.
    pub warnings: Vec<EstimateWarning>,
    /// Plain-language interpretation of the coverage.
    pub interpretation: Vec<Interpretation>,
}
