//! Configuration types for the estimator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Assumptions, PhaseDurations, RoleEntry};

/// Metadata about the estimator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorMetadata {
    /// The human-readable name of the estimator.
    pub name: String,
    /// The version of this configuration.
    pub version: String,
    /// A short description shown alongside the estimator.
    #[serde(default)]
    pub description: String,
}

/// Default inputs used when a request leaves them out.
///
/// Percent fields are percent points (`15` meaning 15%), matching what a
/// user types into the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultInputs {
    /// Default phase durations in weeks.
    #[serde(default)]
    pub phase_weeks: PhaseDurations,
    /// Default payroll burden in percent points.
    #[serde(default)]
    pub burden_percent: Decimal,
    /// Default overhead in percent points of revenue.
    #[serde(default)]
    pub overhead_percent: Decimal,
    /// Default profit in percent points of revenue.
    #[serde(default)]
    pub profit_percent: Decimal,
    /// Default total project budget.
    #[serde(default)]
    pub project_budget: Decimal,
}

impl DefaultInputs {
    /// Converts the default percent points into fractional assumptions.
    pub fn assumptions(&self) -> Assumptions {
        Assumptions::from_percent_points(
            self.burden_percent,
            self.overhead_percent,
            self.profit_percent,
        )
    }
}

/// Structure of `estimator.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimatorFile {
    /// Estimator metadata.
    pub estimator: EstimatorMetadata,
    /// Default inputs.
    pub defaults: DefaultInputs,
}

/// Structure of `roster.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// The roster template, in display order.
    pub roles: Vec<RoleEntry>,
}

/// The complete estimator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    metadata: EstimatorMetadata,
    defaults: DefaultInputs,
    roster: Vec<RoleEntry>,
}

impl EstimatorConfig {
    /// Creates a new EstimatorConfig from its component parts.
    pub fn new(metadata: EstimatorMetadata, defaults: DefaultInputs, roster: Vec<RoleEntry>) -> Self {
        Self {
            metadata,
            defaults,
            roster,
        }
    }

    /// Returns the estimator metadata.
    pub fn metadata(&self) -> &EstimatorMetadata {
        &self.metadata
    }

    /// Returns the default inputs.
    pub fn defaults(&self) -> &DefaultInputs {
        &self.defaults
    }

    /// Returns the default roster template.
    pub fn roster(&self) -> &[RoleEntry] {
        &self.roster
    }
}
