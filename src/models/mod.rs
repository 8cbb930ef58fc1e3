//! Core data models for the cost engine.
//!
//! This module contains the roster, phase, assumption and result types used
//! throughout the engine.

mod assumptions;
mod estimate;
mod lenient;
mod phase;
mod role;

pub use assumptions::{Assumptions, FeeProposals, ProposalTier};
pub use estimate::{
    ComputedRole, CostBreakdown, CoverageRow, CoverageStatus, Estimate, EstimateInput,
    EstimateTotals, EstimateWarning, Interpretation, InterpretationLevel,
};
pub use lenient::{LenientNumber, parse_money};
pub use phase::{Phase, PhaseDurations, PhaseFractions, WEEKS_PER_YEAR};
pub use role::{PhaseAllocation, RoleEntry};
