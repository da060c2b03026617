// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::AthleteId;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Errors that abort a whole dashboard transform.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("Malformed profile for athlete {athlete_id}: {reason}")]
    MalformedProfile { athlete_id: AthleteId, reason: String },
}

/// Pace cannot be computed for this distance/time pair.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PaceError {
    #[error("Cannot compute pace over zero distance")]
    DivisionByZero,

    #[error("Cannot compute pace from a negative or non-finite time")]
    InvalidTime,
}

/// A single record that was skipped or degraded during a transform.
///
/// Warnings never abort a transform; they are returned next to the rows so
/// the dashboard can show a banner instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RecordWarning {
    /// Activity payload could not be parsed and was skipped.
    MalformedActivity {
        #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
        activity_id: u64,
        reason: String,
    },
    /// Pace was replaced with a placeholder.
    PaceUnavailable {
        athlete: String,
        title: String,
        reason: String,
    },
    /// Best effort entry without a segment name or time was skipped.
    IncompleteEffort { athlete: String, title: String },
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
            }
            AppError::Transform(err) => {
                tracing::error!(error = %err, "Dashboard data is malformed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "malformed_data",
                    Some(err.to_string()),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
