//! Calculation logic for the cost engine.
//!
//! This module contains percent normalization, phase allocation validation,
//! loaded payroll cost calculation, ROM fee derivation, proposal coverage
//! and the pipeline that ties them together into a single estimate.

mod cost;
mod coverage;
mod fee;
mod percent;
mod row_validation;
mod summary;

pub use cost::compute_costs;
pub use coverage::{coverage, evaluate_proposals};
pub use fee::{BudgetMarkups, budget_markups, required_fee};
pub use percent::{normalize_allocation, normalize_percent, percent_to_fraction};
pub use row_validation::{
    ALLOCATION_TOLERANCE, OVER_ALLOCATION_CODE, allocation_warnings, validate_rows,
};
pub use summary::{
    ENTER_TEAM, MARKUPS_TOO_HIGH, MID_BELOW_PAYROLL, MID_BELOW_ROM, MID_COVERS_PAYROLL,
    MID_MEETS_ROM, estimate, interpret,
};
