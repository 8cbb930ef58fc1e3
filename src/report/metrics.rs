//! Headline metrics and the coverage table as display rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CoverageRow, CoverageStatus, EstimateTotals};

use super::{format_money, format_percent};

/// One of the headline figures above the coverage table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineMetric {
    /// The metric label.
    pub label: String,
    /// The exact value.
    pub value: Decimal,
    /// The value formatted as money.
    pub display: String,
}

impl HeadlineMetric {
    fn new(label: &str, value: Decimal) -> Self {
        Self {
            label: label.to_string(),
            value,
            display: format_money(value),
        }
    }
}

/// Builds the four headline metrics: payroll, overhead, profit, total fee.
pub fn headline_metrics(totals: &EstimateTotals) -> Vec<HeadlineMetric> {
    vec![
        HeadlineMetric::new("TOTAL COST OF TIME (Payroll)", totals.total_payroll_cost),
        HeadlineMetric::new("Overhead ($)", totals.overhead_dollars),
        HeadlineMetric::new("Profit ($)", totals.profit_dollars),
        HeadlineMetric::new("Total Fee ($)", totals.total_fee),
    ]
}

/// A coverage row with every cell formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDisplayRow {
    /// Proposal label ("Low", "Mid", "High").
    pub proposal: String,
    /// Fee formatted as money.
    pub fee: String,
    /// Payroll coverage, e.g. `"115.9%"` or `"—"`.
    pub payroll_covered: String,
    /// Highlight for the payroll coverage cell.
    pub payroll_status: CoverageStatus,
    /// Total fee coverage, e.g. `"80.8%"` or `"—"`.
    pub fee_covered: String,
    /// Highlight for the fee coverage cell.
    pub fee_status: CoverageStatus,
}

/// Formats the coverage table.
pub fn coverage_display(rows: &[CoverageRow]) -> Vec<CoverageDisplayRow> {
    rows.iter()
        .map(|row| CoverageDisplayRow {
            proposal: row.proposal.label().to_string(),
            fee: format_money(row.fee),
            payroll_covered: format_percent(row.payroll_coverage),
            payroll_status: row.payroll_status,
            fee_covered: format_percent(row.fee_coverage),
            fee_status: row.fee_status,
        })
        .collect()
}
