// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity feed: every club run, newest first.

use std::collections::HashSet;

use crate::error::{RecordWarning, TransformError};
use crate::format::{format_time, pace_from_distance_time, PACE_UNAVAILABLE};
use crate::models::stats::round_km;
use crate::models::{ActivityRecord, ActivityRow, AthleteId, AthleteRecord, Transformed};
use crate::services::names::resolve_directory;

/// Flatten runs into feed rows.
///
/// Runs of unknown or excluded athletes are left out. Rows are sorted by
/// start time, newest first; runs without a usable start time go last.
pub fn flatten_activities(
    athletes: &[AthleteRecord],
    activities: &[ActivityRecord],
    excluded: &HashSet<AthleteId>,
    run_type: &str,
) -> Result<Transformed<ActivityRow>, TransformError> {
    let directory = resolve_directory(athletes, excluded)?;
    let mut warnings = Vec::new();
    let mut rows = Vec::new();

    for activity in activities.iter().filter(|a| a.is_type(run_type)) {
        let Some(identity) = activity.athlete_id().and_then(|id| directory.get(&id)) else {
            tracing::debug!(
                athlete_id = ?activity.athlete_id(),
                "Skipping run for unknown or excluded athlete"
            );
            continue;
        };

        let distance_m = activity.distance_meters();
        let pace_label = pace_from_distance_time(distance_m, activity.elapsed_time.unwrap_or(0.0))
            .unwrap_or_else(|e| {
                tracing::warn!(
                    athlete = %identity.display_name,
                    title = ?activity.name,
                    error = %e,
                    "No pace for run"
                );
                warnings.push(RecordWarning::PaceUnavailable {
                    athlete: identity.display_name.clone(),
                    title: activity.name.clone().unwrap_or_default(),
                    reason: e.to_string(),
                });
                PACE_UNAVAILABLE.to_string()
            });

        let row = ActivityRow {
            profile_pic: identity.profile_pic.clone(),
            display_name: identity.display_name.clone(),
            distance_km: round_km(distance_m),
            pace_label,
            duration_label: format_time(activity.elapsed_seconds()),
            timestamp: activity.start_date_local.clone(),
            title: activity.name.clone(),
        };
        rows.push((activity.started_at(), row));
    }

    // None orders before any Some, so undated runs end up last
    rows.sort_by(|(a, _), (b, _)| b.cmp(a));

    Ok(Transformed::new(
        rows.into_iter().map(|(_, row)| row).collect(),
        warnings,
    ))
}
