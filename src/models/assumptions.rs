//! Cost assumptions and fee proposals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Burden, overhead and profit assumptions, each a fraction.
///
/// Burden is a fraction of compensation; overhead and profit are fractions of
/// revenue (the fee).
///
/// # Example
///
/// ```
/// use cm_cost_engine::models::Assumptions;
/// use rust_decimal::Decimal;
///
/// let assumptions = Assumptions::from_percent_points(
///     Decimal::from(15),
///     Decimal::from(10),
///     Decimal::from(5),
/// );
/// assert_eq!(assumptions.burden_pct, Decimal::new(15, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assumptions {
    /// Employer-side cost added on top of compensation.
    pub burden_pct: Decimal,
    /// Overhead as a fraction of revenue.
    pub overhead_pct: Decimal,
    /// Profit as a fraction of revenue.
    pub profit_pct: Decimal,
}

impl Assumptions {
    /// Builds assumptions from percent points (`15` meaning 15%).
    pub fn from_percent_points(burden: Decimal, overhead: Decimal, profit: Decimal) -> Self {
        let hundred = Decimal::ONE_HUNDRED;
        Self {
            burden_pct: burden / hundred,
            overhead_pct: overhead / hundred,
            profit_pct: profit / hundred,
        }
    }

    /// Returns the share of revenue left once overhead and profit are taken.
    pub fn revenue_remainder(&self) -> Decimal {
        Decimal::ONE
            .saturating_sub(self.overhead_pct)
            .saturating_sub(self.profit_pct)
    }
}

/// The three proposal tiers compared in the coverage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalTier {
    /// Lowest proposal.
    Low,
    /// Middle proposal.
    Mid,
    /// Highest proposal.
    High,
}

impl ProposalTier {
    /// Returns the display label for the tier.
    pub fn label(self) -> &'static str {
        match self {
            ProposalTier::Low => "Low",
            ProposalTier::Mid => "Mid",
            ProposalTier::High => "High",
        }
    }
}

/// Fee proposals received for the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeeProposals {
    /// Low fee proposal.
    pub low: Decimal,
    /// Mid fee proposal.
    pub mid: Decimal,
    /// High fee proposal.
    pub high: Decimal,
}

impl FeeProposals {
    /// Returns each proposal paired with its tier, in Low, Mid, High order.
    pub fn tiers(&self) -> [(ProposalTier, Decimal); 3] {
        [
            (ProposalTier::Low, self.low),
            (ProposalTier::Mid, self.mid),
            (ProposalTier::High, self.high),
        ]
    }
}
