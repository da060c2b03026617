// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-athlete ranking aggregates.

use chrono::NaiveDateTime;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{ActivityRecord, AthleteId};

/// Running totals for one athlete, folded over their activities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningTally {
    /// Total distance (meters)
    pub total_distance_m: f64,
    pub activity_count: u32,
    /// Start of the most recent activity
    pub last_activity_at: Option<NaiveDateTime>,
}

impl RunningTally {
    /// Add an activity to the tally.
    ///
    /// The caller has already checked the owner and sport type. An activity
    /// without a parseable start date still counts toward the totals but
    /// leaves `last_activity_at` alone.
    pub fn record(&mut self, activity: &ActivityRecord) {
        self.total_distance_m += activity.distance_meters();
        self.activity_count += 1;

        if let Some(started_at) = activity.started_at() {
            if self.last_activity_at.map_or(true, |last| started_at > last) {
                self.last_activity_at = Some(started_at);
            }
        }
    }
}

/// One row of the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AthleteSummary {
    /// 1-based position in the ranking
    pub rank: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub athlete_id: AthleteId,
    pub profile_pic: Option<String>,
    pub display_name: String,
    pub total_distance_m: f64,
    /// Total distance in km, rounded to one decimal
    pub total_distance_km: f64,
    pub activity_count: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub last_activity_at: Option<NaiveDateTime>,
}

/// Meters to kilometers, rounded to one decimal.
pub fn round_km(meters: f64) -> f64 {
    (meters / 1000.0 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AthleteRef;

    fn run(distance: Option<f64>, date: Option<&str>) -> ActivityRecord {
        ActivityRecord {
            activity_type: Some("Run".to_string()),
            athlete: AthleteRef { id: Some(1) },
            distance,
            start_date_local: date.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_record_accumulates() {
        let mut tally = RunningTally::default();

        tally.record(&run(Some(5000.0), Some("2024-01-10T10:00:00Z")));
        tally.record(&run(Some(10000.0), Some("2024-01-20T10:00:00Z")));

        assert_eq!(tally.total_distance_m, 15000.0);
        assert_eq!(tally.activity_count, 2);
        assert_eq!(
            tally.last_activity_at.unwrap().to_string(),
            "2024-01-20 10:00:00"
        );
    }

    #[test]
    fn test_last_activity_only_moves_forward() {
        let mut tally = RunningTally::default();

        tally.record(&run(Some(1000.0), Some("2024-01-20T10:00:00Z")));
        tally.record(&run(Some(1000.0), Some("2024-01-10T10:00:00Z")));

        assert_eq!(
            tally.last_activity_at.unwrap().to_string(),
            "2024-01-20 10:00:00"
        );
    }

    #[test]
    fn test_unparseable_date_still_counts() {
        let mut tally = RunningTally::default();

        tally.record(&run(Some(1000.0), Some("2024-01-20T10:00:00Z")));
        tally.record(&run(None, Some("garbage")));
        tally.record(&run(Some(500.0), None));

        assert_eq!(tally.total_distance_m, 1500.0);
        assert_eq!(tally.activity_count, 3);
        assert_eq!(
            tally.last_activity_at.unwrap().to_string(),
            "2024-01-20 10:00:00"
        );
    }

    #[test]
    fn test_round_km() {
        assert_eq!(round_km(15000.0), 15.0);
        assert_eq!(round_km(5049.0), 5.0);
        assert_eq!(round_km(5051.0), 5.1);
        assert_eq!(round_km(0.0), 0.0);
    }
}
