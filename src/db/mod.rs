//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Default collection names, matching the tables the ingest job writes.
pub mod collections {
    /// Athlete profiles (keyed by athlete_id)
    pub const ATHLETES: &str = "athlete_credentials";
    /// Raw Strava activities (keyed by activity_id)
    pub const ACTIVITIES: &str = "activities";
}
