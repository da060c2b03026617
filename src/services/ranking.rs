// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club ranking: total distance, run count and last run per athlete.

use std::collections::{HashMap, HashSet};

use crate::error::TransformError;
use crate::models::stats::round_km;
use crate::models::{
    ActivityRecord, AthleteId, AthleteRecord, AthleteSummary, RunningTally, Transformed,
};
use crate::services::names::resolve_directory;

/// Build the ranking table.
///
/// Only activities of `run_type` owned by a non-excluded athlete count.
/// Every non-excluded athlete gets a row, even with no runs. Rows are
/// ordered by total distance, descending; athletes with equal distance keep
/// their order from `athletes`.
pub fn aggregate_ranking(
    athletes: &[AthleteRecord],
    activities: &[ActivityRecord],
    excluded: &HashSet<AthleteId>,
    run_type: &str,
) -> Result<Transformed<AthleteSummary>, TransformError> {
    let directory = resolve_directory(athletes, excluded)?;

    let tallies = activities
        .iter()
        .filter(|activity| activity.is_type(run_type))
        .fold(
            HashMap::<AthleteId, RunningTally>::new(),
            |mut tallies, activity| {
                match activity.athlete_id().filter(|id| directory.contains_key(id)) {
                    Some(id) => tallies.entry(id).or_default().record(activity),
                    None => tracing::debug!(
                        athlete_id = ?activity.athlete_id(),
                        "Skipping run for unknown or excluded athlete"
                    ),
                }
                tallies
            },
        );

    let mut seen = HashSet::new();
    let mut summaries: Vec<AthleteSummary> = athletes
        .iter()
        .filter(|athlete| seen.insert(athlete.athlete_id))
        .filter_map(|athlete| {
            let identity = directory.get(&athlete.athlete_id)?;
            let tally = tallies
                .get(&athlete.athlete_id)
                .cloned()
                .unwrap_or_default();

            Some(AthleteSummary {
                rank: 0,
                athlete_id: athlete.athlete_id,
                profile_pic: identity.profile_pic.clone(),
                display_name: identity.display_name.clone(),
                total_distance_m: tally.total_distance_m,
                total_distance_km: round_km(tally.total_distance_m),
                activity_count: tally.activity_count,
                last_activity_at: tally.last_activity_at,
            })
        })
        .collect();

    // sort_by is stable, so ties keep athlete order
    summaries.sort_by(|a, b| b.total_distance_m.total_cmp(&a.total_distance_m));
    for (position, summary) in summaries.iter_mut().enumerate() {
        summary.rank = position as u32 + 1;
    }

    tracing::debug!(athletes = summaries.len(), "Ranking aggregated");
    Ok(Transformed::new(summaries, Vec::new()))
}
