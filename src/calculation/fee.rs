//! ROM required fee and budget markups.
//!
//! Overhead and profit are percentages of revenue (the fee itself), so the
//! fee that recovers payroll must be grossed up rather than summed:
//!
//! ```text
//! rom_fee = payroll / (1 - overhead - profit)
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computes the ROM required fee.
///
/// Returns `None` when overhead and profit together take 100% or more of
/// revenue, since no fee can then recover the payroll cost.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::calculation::required_fee;
/// use rust_decimal::Decimal;
///
/// let fee = required_fee(Decimal::from(85_000), Decimal::new(10, 2), Decimal::new(5, 2));
/// assert_eq!(fee, Some(Decimal::from(100_000)));
///
/// let fee = required_fee(Decimal::from(85_000), Decimal::new(60, 2), Decimal::new(45, 2));
/// assert_eq!(fee, None);
/// ```
pub fn required_fee(
    total_payroll_cost: Decimal,
    overhead_pct: Decimal,
    profit_pct: Decimal,
) -> Option<Decimal> {
    let remainder = Decimal::ONE
        .saturating_sub(overhead_pct)
        .saturating_sub(profit_pct);
    if remainder <= Decimal::ZERO {
        return None;
    }
    total_payroll_cost.checked_div(remainder)
}

/// Overhead and profit dollars taken against the project budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetMarkups {
    /// Overhead dollars.
    pub overhead_dollars: Decimal,
    /// Profit dollars.
    pub profit_dollars: Decimal,
}

impl BudgetMarkups {
    /// Returns the total fee: payroll plus both markups.
    pub fn total_fee(&self, total_payroll_cost: Decimal) -> Decimal {
        total_payroll_cost
            .saturating_add(self.overhead_dollars)
            .saturating_add(self.profit_dollars)
    }
}

/// Sizes overhead and profit dollars from the total project budget.
pub fn budget_markups(
    project_budget: Decimal,
    overhead_pct: Decimal,
    profit_pct: Decimal,
) -> BudgetMarkups {
    BudgetMarkups {
        overhead_dollars: project_budget.saturating_mul(overhead_pct),
        profit_dollars: project_budget.saturating_mul(profit_pct),
    }
}
