// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rows of the activity feed and best-effort tables.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::RecordWarning;

/// One run in the activity feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRow {
    pub profile_pic: Option<String>,
    pub display_name: String,
    /// Distance in km, rounded to one decimal
    pub distance_km: f64,
    pub pace_label: String,
    pub duration_label: String,
    /// Raw `start_date_local`, formatted by the frontend
    pub timestamp: Option<String>,
    pub title: Option<String>,
}

/// Fastest effort of one athlete on one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EffortRow {
    pub profile_pic: Option<String>,
    pub display_name: String,
    pub segment_name: String,
    pub distance_km: f64,
    pub duration_label: String,
    /// Sort key, not displayed
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub elapsed_seconds: i64,
    pub pace_label: String,
    pub timestamp: Option<String>,
    pub activity_title: Option<String>,
}

/// Output of a dashboard transform: the rows plus any records that were
/// skipped or degraded along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transformed<T> {
    pub rows: Vec<T>,
    pub warnings: Vec<RecordWarning>,
}

impl<T> Transformed<T> {
    pub fn new(rows: Vec<T>, warnings: Vec<RecordWarning>) -> Self {
        Self { rows, warnings }
    }
}
