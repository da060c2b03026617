// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Personal bests: the fastest effort per athlete on each segment.

use std::collections::HashSet;

use crate::error::{RecordWarning, TransformError};
use crate::format::{format_time, pace_from_distance_time, PACE_UNAVAILABLE};
use crate::models::{ActivityRecord, AthleteId, AthleteRecord, EffortRow, Transformed};
use crate::services::names::{resolve_directory, AthleteIdentity};

/// Reduce the best efforts embedded in activities to one row per
/// (athlete name, segment).
///
/// All activity types are considered. Candidates are sorted by their raw
/// elapsed time and the first row per pair is kept, so the output holds the
/// fastest effort for each pair (ties go to the effort seen first) ordered
/// from fastest to slowest. Sub-second differences still decide the winner
/// even though `elapsed_seconds` is shown in whole seconds.
pub fn reduce_best_efforts(
    athletes: &[AthleteRecord],
    activities: &[ActivityRecord],
    excluded: &HashSet<AthleteId>,
) -> Result<Transformed<EffortRow>, TransformError> {
    let directory = resolve_directory(athletes, excluded)?;
    let mut warnings = Vec::new();
    let mut candidates = Vec::new();

    for activity in activities.iter().filter(|a| !a.best_efforts().is_empty()) {
        let Some(identity) = activity.athlete_id().and_then(|id| directory.get(&id)) else {
            tracing::debug!(
                athlete_id = ?activity.athlete_id(),
                "Skipping best efforts for unknown or excluded athlete"
            );
            continue;
        };

        candidates.extend(explode_efforts(activity, identity, &mut warnings));
    }

    // Stable, so equal times keep encounter order
    candidates.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    let mut seen = HashSet::new();
    let rows: Vec<EffortRow> = candidates
        .into_iter()
        .map(|(_, row)| row)
        .filter(|row| seen.insert((row.display_name.clone(), row.segment_name.clone())))
        .collect();

    tracing::debug!(rows = rows.len(), "Best efforts reduced");
    Ok(Transformed::new(rows, warnings))
}

/// One candidate row per usable effort in `activity`, keyed by the raw
/// elapsed time.
fn explode_efforts(
    activity: &ActivityRecord,
    identity: &AthleteIdentity,
    warnings: &mut Vec<RecordWarning>,
) -> Vec<(f64, EffortRow)> {
    let title = activity.name.clone().unwrap_or_default();
    let mut rows = Vec::new();

    for effort in activity.best_efforts() {
        let (Some(segment_name), Some(elapsed_time), Some(elapsed_seconds)) = (
            effort.name.clone(),
            effort.elapsed_time,
            effort.elapsed_seconds(),
        ) else {
            tracing::warn!(
                athlete = %identity.display_name,
                title = %title,
                "Skipping best effort without segment name or time"
            );
            warnings.push(RecordWarning::IncompleteEffort {
                athlete: identity.display_name.clone(),
                title: title.clone(),
            });
            continue;
        };

        let distance_m = effort.distance.unwrap_or(0.0);
        let pace_label = pace_from_distance_time(distance_m, elapsed_seconds as f64)
            .unwrap_or_else(|e| {
                tracing::warn!(
                    athlete = %identity.display_name,
                    segment = %segment_name,
                    error = %e,
                    "No pace for best effort"
                );
                warnings.push(RecordWarning::PaceUnavailable {
                    athlete: identity.display_name.clone(),
                    title: title.clone(),
                    reason: e.to_string(),
                });
                PACE_UNAVAILABLE.to_string()
            });

        rows.push((
            elapsed_time,
            EffortRow {
                profile_pic: identity.profile_pic.clone(),
                display_name: identity.display_name.clone(),
                segment_name,
                distance_km: distance_m / 1000.0,
                duration_label: format_time(elapsed_seconds),
                elapsed_seconds,
                pace_label,
                timestamp: effort.start_date_local.clone(),
                activity_title: activity.name.clone(),
            },
        ));
    }

    rows
}
