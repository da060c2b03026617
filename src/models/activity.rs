// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model for storage and the dashboard transforms.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::RecordWarning;
use crate::models::AthleteId;
use crate::time_utils::parse_start_date;

/// Activity record as stored in the `activities` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredActivity {
    /// Strava activity ID (also used as document ID)
    pub activity_id: u64,
    /// Strava activity JSON
    pub data: String,
}

/// Reference to the owning athlete inside an activity payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteRef {
    pub id: Option<AthleteId>,
}

/// A Strava activity after parsing at the storage boundary.
///
/// Every field is optional: the payload comes from Strava verbatim and
/// older records are missing fields newer ones carry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Sport type (Run, Ride, Walk, etc.)
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub athlete: AthleteRef,
    /// Activity name/title
    pub name: Option<String>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Elapsed time in seconds
    pub elapsed_time: Option<f64>,
    /// Moving time in seconds
    pub moving_time: Option<f64>,
    /// Local start time, e.g. "2024-03-02T09:15:00Z"
    pub start_date_local: Option<String>,
    pub best_efforts: Option<Vec<BestEffort>>,
}

/// A named effort (5K, 1 mile, ...) recorded within an activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestEffort {
    /// Segment name
    pub name: Option<String>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Elapsed time in seconds
    pub elapsed_time: Option<f64>,
    pub start_date_local: Option<String>,
}

impl ActivityRecord {
    pub fn athlete_id(&self) -> Option<AthleteId> {
        self.athlete.id
    }

    /// True if this activity has the given sport type.
    pub fn is_type(&self, activity_type: &str) -> bool {
        self.activity_type.as_deref() == Some(activity_type)
    }

    /// Distance in meters; missing counts as zero.
    pub fn distance_meters(&self) -> f64 {
        self.distance.unwrap_or(0.0)
    }

    /// Elapsed time in whole seconds; missing counts as zero.
    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed_time.map(whole_seconds).unwrap_or(0)
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.start_date_local.as_deref().and_then(parse_start_date)
    }

    pub fn best_efforts(&self) -> &[BestEffort] {
        self.best_efforts.as_deref().unwrap_or_default()
    }
}

impl BestEffort {
    pub fn elapsed_seconds(&self) -> Option<i64> {
        self.elapsed_time.map(whole_seconds)
    }
}

fn whole_seconds(seconds: f64) -> i64 {
    seconds.trunc() as i64
}

/// Parse every stored activity.
///
/// Activities are independent, so a payload that fails to parse is
/// reported as a warning and the rest of the batch carries on.
pub fn parse_activities(stored: &[StoredActivity]) -> (Vec<ActivityRecord>, Vec<RecordWarning>) {
    let mut records = Vec::with_capacity(stored.len());
    let mut warnings = Vec::new();

    for activity in stored {
        match serde_json::from_str::<ActivityRecord>(&activity.data) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(
                    activity_id = activity.activity_id,
                    error = %e,
                    "Skipping malformed activity"
                );
                warnings.push(RecordWarning::MalformedActivity {
                    activity_id: activity.activity_id,
                    reason: e.to_string(),
                });
            }
        }
    }

    (records, warnings)
}
