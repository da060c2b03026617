// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard API routes.
//!
//! Every request scans the store and rebuilds the views; there is no cache.

use crate::error::Result;
use crate::models::{ActivityRow, AthleteSummary, EffortRow, Transformed};
use crate::services::{ClubData, Dashboard};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Dashboard routes (public, read-only).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/ranking", get(get_ranking))
        .route("/api/activities", get(get_activities))
        .route("/api/best-efforts", get(get_best_efforts))
}

/// Get the whole dashboard in one response.
async fn get_dashboard(State(state): State<Arc<AppState>>) -> Result<Json<Dashboard>> {
    let data = ClubData::load(&state.db).await?;
    let today = chrono::Local::now().date_naive();

    let dashboard = Dashboard::build(&state.config, &data, today)?;

    tracing::debug!(
        ranking = dashboard.ranking.len(),
        activities = dashboard.activities.len(),
        best_efforts = dashboard.best_efforts.len(),
        week = dashboard.challenge.week,
        "Dashboard built"
    );

    Ok(Json(dashboard))
}

/// Get the ranking table.
async fn get_ranking(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Transformed<AthleteSummary>>> {
    let data = ClubData::load(&state.db).await?;
    Ok(Json(data.ranking(&state.config)?))
}

/// Get the activity feed.
async fn get_activities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Transformed<ActivityRow>>> {
    let data = ClubData::load(&state.db).await?;
    Ok(Json(data.feed(&state.config)?))
}

/// Get the personal-best table.
async fn get_best_efforts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Transformed<EffortRow>>> {
    let data = ClubData::load(&state.db).await?;
    Ok(Json(data.best_efforts(&state.config)?))
}
