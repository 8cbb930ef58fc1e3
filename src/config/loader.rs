//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading estimator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::RoleEntry;

use super::types::{DefaultInputs, EstimatorConfig, EstimatorFile, EstimatorMetadata, RosterFile};

/// Loads and provides access to estimator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/cm_default/
/// ├── estimator.yaml   # Metadata and default inputs
/// └── roster.yaml      # Default roster template
/// ```
///
/// # Example
///
/// ```no_run
/// use cm_cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cm_default").unwrap();
/// println!("Loaded estimator: {}", loader.metadata().name);
/// for role in loader.default_roster() {
///     println!("  {}", role.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EstimatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML or is missing fields (`ConfigParseError`)
    /// - A default week count or percentage is negative (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let estimator = Self::load_yaml::<EstimatorFile>(&path.join("estimator.yaml"))?;
        let roster = Self::load_yaml::<RosterFile>(&path.join("roster.yaml"))?;

        Self::validate_defaults(&estimator.defaults)?;

        let config = EstimatorConfig::new(estimator.estimator, estimator.defaults, roster.roles);
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_defaults(defaults: &DefaultInputs) -> EngineResult<()> {
        let checks = [
            ("defaults.phase_weeks.pre_weeks", defaults.phase_weeks.pre_weeks),
            ("defaults.phase_weeks.con_weeks", defaults.phase_weeks.con_weeks),
            ("defaults.phase_weeks.post_weeks", defaults.phase_weeks.post_weeks),
            ("defaults.burden_percent", defaults.burden_percent),
            ("defaults.overhead_percent", defaults.overhead_percent),
            ("defaults.profit_percent", defaults.profit_percent),
            ("defaults.project_budget", defaults.project_budget),
        ];

        match checks.iter().find(|(_, value)| *value < Decimal::ZERO) {
            Some((field, _)) => Err(EngineError::InvalidConfig {
                field: field.to_string(),
                message: "must not be negative".to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Returns the underlying estimator configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Returns the estimator metadata.
    pub fn metadata(&self) -> &EstimatorMetadata {
        self.config.metadata()
    }

    /// Returns the default inputs.
    pub fn defaults(&self) -> &DefaultInputs {
        self.config.defaults()
    }

    /// Returns the default roster template.
    pub fn default_roster(&self) -> &[RoleEntry] {
        self.config.roster()
    }
}
