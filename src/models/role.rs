//! Roster entries.
//!
//! A roster is an ordered `Vec<RoleEntry>` owned by the caller. Role names
//! are not required to be unique and order is preserved for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LenientNumber;

/// A single team role with its phase allocations and compensation.
///
/// Phase percentages may be entered as fractions (`0.30`) or percentages
/// (`30`). Unparsable cells count as zero.
///
/// # Example
///
/// ```
/// use cm_cost_engine::models::RoleEntry;
///
/// let entry = RoleEntry::new("Site Manager", 10, 100, "100", 145_000);
/// assert_eq!(entry.name, "Site Manager");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleEntry {
    /// The role name (e.g., "CM", "Estimator").
    #[serde(default, alias = "role")]
    pub name: String,
    /// Share of time allocated during pre-construction.
    #[serde(default)]
    pub pre_pct: LenientNumber,
    /// Share of time allocated during construction.
    #[serde(default)]
    pub con_pct: LenientNumber,
    /// Share of time allocated during post-construction / closeout.
    #[serde(default)]
    pub post_pct: LenientNumber,
    /// Total annual compensation before burden.
    #[serde(default)]
    pub total_compensation: LenientNumber,
}

impl RoleEntry {
    /// Creates a roster entry from anything convertible into cell values.
    pub fn new(
        name: impl Into<String>,
        pre_pct: impl Into<LenientNumber>,
        con_pct: impl Into<LenientNumber>,
        post_pct: impl Into<LenientNumber>,
        total_compensation: impl Into<LenientNumber>,
    ) -> Self {
        Self {
            name: name.into(),
            pre_pct: pre_pct.into(),
            con_pct: con_pct.into(),
            post_pct: post_pct.into(),
            total_compensation: total_compensation.into(),
        }
    }

    /// Returns the name used when referring to this row in messages.
    ///
    /// Blank names are shown as `(role)`.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "(role)"
        } else {
            trimmed
        }
    }
}

/// Normalized phase allocations of a role, each a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseAllocation {
    /// Pre-construction allocation.
    pub pre: Decimal,
    /// Construction allocation.
    pub con: Decimal,
    /// Post-construction allocation.
    pub post: Decimal,
}

impl PhaseAllocation {
    /// Returns the sum of the three allocations, saturating at the
    /// `Decimal` range.
    pub fn total(&self) -> Decimal {
        self.pre.saturating_add(self.con).saturating_add(self.post)
    }
}
