//! Application state for the cost engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers. The state is read-only: each request carries
//! its own roster and the engine keeps nothing between requests.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded estimator configuration (default inputs and roster
/// template).
#[derive(Clone)]
pub struct AppState {
    /// The loaded estimator configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let config = ConfigLoader::load("./config/cm_default").expect("Failed to load config");
        let state = AppState::new(config);
        let cloned = state.clone();

        assert!(std::ptr::eq(state.config(), cloned.config()));
    }
}
