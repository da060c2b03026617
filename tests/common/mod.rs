// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use runclub_tracker::config::Config;
use runclub_tracker::db::FirestoreDb;
use runclub_tracker::models::{StoredActivity, StoredAthlete};
use runclub_tracker::routes::create_router;
use runclub_tracker::AppState;
use serde_json::json;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Stored athlete with a standard Strava profile payload.
#[allow(dead_code)]
pub fn stored_athlete(athlete_id: u64, firstname: &str, lastname: &str) -> StoredAthlete {
    StoredAthlete {
        athlete_id,
        data: json!({
            "id": athlete_id,
            "firstname": firstname,
            "lastname": lastname,
            "profile": format!("https://dgalywyr863hv.cloudfront.net/pictures/athletes/{}/large.jpg", athlete_id),
            "sex": "M",
        })
        .to_string(),
    }
}

/// Stored run, optionally carrying a single best effort.
#[allow(dead_code)]
pub fn stored_run(
    activity_id: u64,
    athlete_id: u64,
    distance: f64,
    elapsed_time: u64,
    start_date_local: &str,
    effort: Option<(&str, f64, u64)>,
) -> StoredActivity {
    let best_efforts: Vec<serde_json::Value> = effort
        .into_iter()
        .map(|(name, distance, elapsed)| {
            json!({
                "name": name,
                "distance": distance,
                "elapsed_time": elapsed,
                "moving_time": elapsed,
                "start_date_local": start_date_local,
            })
        })
        .collect();

    StoredActivity {
        activity_id,
        data: json!({
            "id": activity_id,
            "type": "Run",
            "sport_type": "Run",
            "athlete": {"id": athlete_id, "resource_state": 1},
            "name": format!("Run {}", activity_id),
            "distance": distance,
            "elapsed_time": elapsed_time,
            "moving_time": elapsed_time,
            "start_date_local": start_date_local,
            "best_efforts": best_efforts,
        })
        .to_string(),
    }
}

/// Stored activity of another sport type.
#[allow(dead_code)]
pub fn stored_activity_of_type(
    activity_id: u64,
    athlete_id: u64,
    kind: &str,
    distance: f64,
) -> StoredActivity {
    StoredActivity {
        activity_id,
        data: json!({
            "type": kind,
            "athlete": {"id": athlete_id},
            "name": format!("{} {}", kind, activity_id),
            "distance": distance,
            "elapsed_time": 3600,
            "start_date_local": "2024-03-10T09:00:00Z",
        })
        .to_string(),
    }
}

/// A small club: two runners, one organizer who is excluded, a ride and a
/// corrupt activity record.
#[allow(dead_code)]
pub fn sample_club() -> (Vec<StoredAthlete>, Vec<StoredActivity>) {
    let athletes = vec![
        stored_athlete(1, "Ann", "Peeters"),
        stored_athlete(2, "Bob", "Claes"),
        stored_athlete(3, "Olga", "Organizer"),
    ];

    let activities = vec![
        stored_run(100, 1, 5000.0, 1500, "2024-03-04T07:30:00Z", Some(("5K", 5000.0, 1200))),
        stored_run(101, 1, 10000.0, 3000, "2024-03-06T07:30:00Z", Some(("5K", 5000.0, 1100))),
        stored_run(102, 2, 21100.0, 7000, "2024-03-05T08:00:00Z", Some(("5K", 5000.0, 1350))),
        stored_run(103, 3, 42200.0, 14000, "2024-03-07T08:00:00Z", Some(("5K", 5000.0, 1000))),
        stored_activity_of_type(104, 2, "Ride", 60000.0),
        StoredActivity {
            activity_id: 105,
            data: "{\"type\": \"Run\", \"distance\": ".to_string(),
        },
    ];

    (athletes, activities)
}

/// Config for the sample club.
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        excluded_athlete_ids: [3].into_iter().collect(),
        ..Config::default()
    }
}

/// Create a test app backed by the in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(
    athletes: Vec<StoredAthlete>,
    activities: Vec<StoredActivity>,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: test_config(),
        db: FirestoreDb::new_in_memory(athletes, activities),
    });

    (create_router(state.clone()), state)
}

/// Create a test app whose database is offline.
#[allow(dead_code)]
pub fn create_offline_test_app() -> axum::Router {
    let state = Arc::new(AppState {
        config: test_config(),
        db: FirestoreDb::new_mock(),
    });

    create_router(state)
}
