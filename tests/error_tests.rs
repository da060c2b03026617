// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{http::StatusCode, response::IntoResponse};
use runclub_tracker::error::{AppError, PaceError, RecordWarning, TransformError};
use serde_json::Value;

async fn response_parts(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[test]
fn test_malformed_profile_message() {
    let err = TransformError::MalformedProfile {
        athlete_id: 17,
        reason: "missing firstname".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Malformed profile for athlete 17: missing firstname"
    );

    // Transform errors pass their message through unchanged
    let app_err: AppError = err.clone().into();
    assert_eq!(app_err.to_string(), err.to_string());
}

#[test]
fn test_pace_error_message() {
    assert_eq!(
        PaceError::DivisionByZero.to_string(),
        "Cannot compute pace over zero distance"
    );
}

#[tokio::test]
async fn test_transform_error_response_has_details() {
    let (status, body) = response_parts(AppError::Transform(TransformError::MalformedProfile {
        athlete_id: 3,
        reason: "missing or empty lastname".to_string(),
    }))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "malformed_data");
    assert_eq!(
        body["details"],
        "Malformed profile for athlete 3: missing or empty lastname"
    );
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let (status, body) =
        response_parts(AppError::Database("connection refused".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "database_error");
    assert!(body.get("details").is_none());
}

#[test]
fn test_warning_serialization() {
    let warning = RecordWarning::PaceUnavailable {
        athlete: "Ann P".to_string(),
        title: "Treadmill".to_string(),
        reason: PaceError::DivisionByZero.to_string(),
    };

    let json = serde_json::to_value(&warning).unwrap();

    assert_eq!(json["kind"], "pace_unavailable");
    assert_eq!(json["athlete"], "Ann P");
    assert_eq!(json["title"], "Treadmill");
    assert_eq!(json["reason"], "Cannot compute pace over zero distance");
}
