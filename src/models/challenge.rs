// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club challenge progress and the weekly series behind the progress chart.

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::ChallengeConfig;
use crate::models::{ActivityRow, AthleteSummary};
use crate::time_utils::{parse_start_date, weeks_since};

/// One week of the progress chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklyProgress {
    /// Weeks since the challenge start, from 0
    pub week: u32,
    /// Club km run up to and including this week; `None` for weeks that
    /// have not happened yet
    pub cumulative_km: Option<f64>,
    /// Where a steady pace toward the goal would be
    pub goal_km: f64,
}

/// Progress toward the club distance goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChallengeProgress {
    /// Current challenge week (may exceed `total_weeks` after the end)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub week: i64,
    pub total_weeks: u32,
    /// Sum of the ranking distances (km)
    pub completed_km: f64,
    pub goal_km: f64,
    /// Distance still to go, never negative
    pub remaining_km: f64,
    /// Weeks 0 through `total_weeks`
    pub weekly: Vec<WeeklyProgress>,
}

impl ChallengeProgress {
    /// Totals come from the ranking, the weekly series from the feed.
    pub fn compute(
        challenge: &ChallengeConfig,
        ranking: &[AthleteSummary],
        feed: &[ActivityRow],
        today: NaiveDate,
    ) -> Self {
        let completed_km = round_tenth(ranking.iter().map(|s| s.total_distance_km).sum());
        let week = weeks_since(challenge.start_year, challenge.start_week, today);

        Self {
            week,
            total_weeks: challenge.total_weeks,
            completed_km,
            goal_km: challenge.goal_km,
            remaining_km: (challenge.goal_km - completed_km).max(0.0),
            weekly: weekly_progress(challenge, feed, week),
        }
    }
}

/// Cumulative club km per challenge week next to a linear goal line.
///
/// Runs are bucketed by the week they started in. Runs before the start,
/// after the last week or without a usable date are left out. Cumulative
/// values stop at `current_week`.
pub fn weekly_progress(
    challenge: &ChallengeConfig,
    feed: &[ActivityRow],
    current_week: i64,
) -> Vec<WeeklyProgress> {
    let mut per_week = vec![0.0; challenge.total_weeks as usize + 1];

    for row in feed {
        let Some(started_at) = row.timestamp.as_deref().and_then(parse_start_date) else {
            continue;
        };
        let week = weeks_since(challenge.start_year, challenge.start_week, started_at.date());
        if let Some(bucket) = usize::try_from(week).ok().and_then(|w| per_week.get_mut(w)) {
            *bucket += row.distance_km;
        }
    }

    let mut cumulative = 0.0;
    per_week
        .into_iter()
        .enumerate()
        .map(|(week, km)| {
            cumulative += km;
            let week = week as u32;
            let goal_km = if challenge.total_weeks == 0 {
                challenge.goal_km
            } else {
                f64::from(week) / f64::from(challenge.total_weeks) * challenge.goal_km
            };

            WeeklyProgress {
                week,
                cumulative_km: (i64::from(week) <= current_week).then(|| round_tenth(cumulative)),
                goal_km,
            }
        })
        .collect()
}

/// Summing rounded values can leave float noise behind.
fn round_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
