//! Request types for the cost engine API.
//!
//! This module defines the JSON request structure for the `/estimate`
//! endpoint and its resolution against the configured defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Assumptions, EstimateInput, FeeProposals, LenientNumber, PhaseDurations, RoleEntry,
};

/// Request body for the `/estimate` endpoint.
///
/// Every field is optional; omitted fields take the configured defaults.
/// Percentages are percent points (`15` meaning 15%). Money fields accept
/// numbers or free text such as `"1 250 000"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Phase durations in weeks.
    #[serde(default)]
    pub phase_weeks: Option<PhaseDurations>,
    /// Payroll burden in percent points.
    #[serde(default)]
    pub burden_percent: Option<Decimal>,
    /// Overhead in percent points of revenue.
    #[serde(default)]
    pub overhead_percent: Option<Decimal>,
    /// Profit in percent points of revenue.
    #[serde(default)]
    pub profit_percent: Option<Decimal>,
    /// Total project budget.
    #[serde(default)]
    pub project_budget: Option<LenientNumber>,
    /// Fee proposals.
    #[serde(default)]
    pub proposals: ProposalsRequest,
    /// The team roster; the configured template is used when omitted.
    #[serde(default)]
    pub roster: Option<Vec<RoleEntry>>,
}

/// Fee proposals in a request. Missing proposals are zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposalsRequest {
    /// Low fee proposal.
    #[serde(default)]
    pub low: Option<LenientNumber>,
    /// Mid fee proposal.
    #[serde(default)]
    pub mid: Option<LenientNumber>,
    /// High fee proposal.
    #[serde(default)]
    pub high: Option<LenientNumber>,
}

impl From<ProposalsRequest> for FeeProposals {
    fn from(req: ProposalsRequest) -> Self {
        FeeProposals {
            low: money_or_zero(req.low.as_ref()),
            mid: money_or_zero(req.mid.as_ref()),
            high: money_or_zero(req.high.as_ref()),
        }
    }
}

fn money_or_zero(value: Option<&LenientNumber>) -> Decimal {
    value.map(LenientNumber::or_zero).unwrap_or(Decimal::ZERO)
}

impl EstimateRequest {
    /// Resolves the request into an engine input, filling gaps from `config`.
    ///
    /// Returns `InvalidInput` when a week count or percentage is negative.
    pub fn resolve(self, config: &ConfigLoader) -> EngineResult<EstimateInput> {
        let defaults = config.defaults();

        let phase_weeks = self.phase_weeks.unwrap_or(defaults.phase_weeks);
        let burden = self.burden_percent.unwrap_or(defaults.burden_percent);
        let overhead = self.overhead_percent.unwrap_or(defaults.overhead_percent);
        let profit = self.profit_percent.unwrap_or(defaults.profit_percent);

        ensure_non_negative("phase_weeks.pre_weeks", phase_weeks.pre_weeks)?;
        ensure_non_negative("phase_weeks.con_weeks", phase_weeks.con_weeks)?;
        ensure_non_negative("phase_weeks.post_weeks", phase_weeks.post_weeks)?;
        ensure_non_negative("burden_percent", burden)?;
        ensure_non_negative("overhead_percent", overhead)?;
        ensure_non_negative("profit_percent", profit)?;

        let project_budget = self
            .project_budget
            .as_ref()
            .map(LenientNumber::or_zero)
            .unwrap_or(defaults.project_budget);

        Ok(EstimateInput {
            roster: self
                .roster
                .unwrap_or_else(|| config.default_roster().to_vec()),
            phase_weeks,
            assumptions: Assumptions::from_percent_points(burden, overhead, profit),
            project_budget,
            proposals: self.proposals.into(),
        })
    }
}

fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    Ok(())
}
