//! HTTP API module for the cost engine.
//!
//! This module provides the REST endpoints a presentation shell uses to
//! fetch the default inputs and to compute estimates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EstimateRequest, ProposalsRequest};
pub use response::{ApiError, DefaultsResponse, EstimateResponse, PhaseDefault};
pub use state::AppState;
