//! HTTP request handlers for the cost engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::estimate;
use crate::models::{Phase, WEEKS_PER_YEAR};
use crate::report::{NO_RESULT, coverage_display, format_money, headline_metrics};

use super::request::EstimateRequest;
use super::response::{
    ApiError, ApiErrorResponse, DefaultsResponse, EstimateResponse, PhaseDefault,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

/// Handler for POST /estimate endpoint.
///
/// Resolves the request against the configured defaults and returns the
/// complete estimate with display formatting.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let input = match request.resolve(state.config()) {
        Ok(input) => input,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Estimate request rejected"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let result = estimate(&input);
    let duration = start_time.elapsed();

    for warning in &result.warnings {
        debug!(
            correlation_id = %correlation_id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }
    info!(
        correlation_id = %correlation_id,
        roles = input.roster.len(),
        warnings = result.warnings.len(),
        total_payroll_cost = %result.totals.total_payroll_cost,
        rom_fee_defined = result.totals.rom_fee.is_some(),
        duration_us = duration.as_micros(),
        "Estimate completed successfully"
    );

    let response = EstimateResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        metrics: headline_metrics(&result.totals),
        rom_fee_display: result
            .totals
            .rom_fee
            .map(format_money)
            .unwrap_or_else(|| NO_RESULT.to_string()),
        coverage_display: coverage_display(&result.coverage),
        estimate: result,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /defaults endpoint.
///
/// Returns the configured default inputs and roster template, the starting
/// point of a new session.
async fn defaults_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config();
    debug!(roles = config.default_roster().len(), "Serving defaults");

    let phases = Phase::ALL
        .iter()
        .map(|&phase| PhaseDefault {
            phase,
            label: phase.label().to_string(),
            weeks: config.defaults().phase_weeks.weeks(phase),
        })
        .collect();

    Json(DefaultsResponse {
        estimator: config.metadata().clone(),
        defaults: config.defaults().clone(),
        roster: config.default_roster().to_vec(),
        phases,
        weeks_per_year: WEEKS_PER_YEAR,
    })
}
