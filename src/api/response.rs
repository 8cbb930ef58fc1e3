//! Response types for the cost engine API.
//!
//! This module defines the estimate and defaults response bodies, the error
//! response structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{DefaultInputs, EstimatorMetadata};
use crate::error::EngineError;
use crate::models::{Estimate, Phase, RoleEntry};
use crate::report::{CoverageDisplayRow, HeadlineMetric};

/// Response body for the `/estimate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Unique identifier for this estimate.
    pub calculation_id: Uuid,
    /// When the estimate was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the estimate.
    pub engine_version: String,
    /// The estimate itself.
    #[serde(flatten)]
    pub estimate: Estimate,
    /// Headline metrics formatted for display.
    pub metrics: Vec<HeadlineMetric>,
    /// ROM required fee formatted for display, `"—"` when undefined.
    pub rom_fee_display: String,
    /// Coverage table formatted for display.
    pub coverage_display: Vec<CoverageDisplayRow>,
}

/// Response body for the `/defaults` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsResponse {
    /// Estimator metadata.
    pub estimator: EstimatorMetadata,
    /// Default inputs, percentages in percent points.
    pub defaults: DefaultInputs,
    /// Default roster template.
    pub roster: Vec<RoleEntry>,
    /// The project phases in order, with their default durations.
    pub phases: Vec<PhaseDefault>,
    /// Number of weeks in a year used for phase fractions.
    pub weeks_per_year: Decimal,
}

/// A project phase as listed by the `/defaults` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDefault {
    /// The phase.
    pub phase: Phase,
    /// Display label, e.g. "Pre-Construction".
    pub label: String,
    /// Default duration in weeks.
    pub weeks: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input '{}': {}", field, message),
                    "Week counts and percentages must be zero or greater",
                ),
            },
        }
    }
}
