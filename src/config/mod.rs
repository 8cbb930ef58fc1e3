//! Configuration loading and management for the estimator.
//!
//! This module loads the estimator's metadata, default inputs and default
//! roster template from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use cm_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cm_default").unwrap();
//! println!("Loaded estimator: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DefaultInputs, EstimatorConfig, EstimatorMetadata};
