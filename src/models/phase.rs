//! Project phases and their durations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of weeks used to convert a phase duration into a fraction of a year.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// A time segment of the project over which role allocation is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Pre-Construction.
    PreConstruction,
    /// Construction.
    Construction,
    /// Post-Construction / Closeout.
    PostConstruction,
}

impl Phase {
    /// All phases in project order.
    pub const ALL: [Phase; 3] = [
        Phase::PreConstruction,
        Phase::Construction,
        Phase::PostConstruction,
    ];

    /// Returns the display label for the phase.
    pub fn label(self) -> &'static str {
        match self {
            Phase::PreConstruction => "Pre-Construction",
            Phase::Construction => "Construction",
            Phase::PostConstruction => "Post-Construction / Closeout",
        }
    }
}

/// Phase durations in weeks.
///
/// # Example
///
/// ```
/// use cm_cost_engine::models::PhaseDurations;
/// use rust_decimal::Decimal;
///
/// let durations = PhaseDurations::new(Decimal::from(26), Decimal::from(26), Decimal::ZERO);
/// let fractions = durations.year_fractions();
/// assert_eq!(fractions.pre, Decimal::new(5, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseDurations {
    /// Pre-construction duration in weeks.
    #[serde(default)]
    pub pre_weeks: Decimal,
    /// Construction duration in weeks.
    #[serde(default)]
    pub con_weeks: Decimal,
    /// Post-construction / closeout duration in weeks.
    #[serde(default)]
    pub post_weeks: Decimal,
}

impl PhaseDurations {
    /// Creates phase durations from week counts.
    pub fn new(pre_weeks: Decimal, con_weeks: Decimal, post_weeks: Decimal) -> Self {
        Self {
            pre_weeks,
            con_weeks,
            post_weeks,
        }
    }

    /// Returns the duration of a single phase in weeks.
    pub fn weeks(&self, phase: Phase) -> Decimal {
        match phase {
            Phase::PreConstruction => self.pre_weeks,
            Phase::Construction => self.con_weeks,
            Phase::PostConstruction => self.post_weeks,
        }
    }

    /// Converts each duration to a fraction of a year (weeks / 52).
    pub fn year_fractions(&self) -> PhaseFractions {
        PhaseFractions {
            pre: self.pre_weeks / WEEKS_PER_YEAR,
            con: self.con_weeks / WEEKS_PER_YEAR,
            post: self.post_weeks / WEEKS_PER_YEAR,
        }
    }
}

/// Phase durations expressed as fractions of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseFractions {
    /// Pre-construction fraction of a year.
    pub pre: Decimal,
    /// Construction fraction of a year.
    pub con: Decimal,
    /// Post-construction fraction of a year.
    pub post: Decimal,
}
