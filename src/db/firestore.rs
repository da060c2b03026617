// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Athletes (Strava profile JSON per athlete)
//! - Activities (Strava activity JSON per activity)
//!
//! Reads are full collection scans; the club is small enough that the
//! dashboard always works on the whole data set.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::db::collections;
use crate::error::AppError;
use crate::models::{StoredActivity, StoredAthlete};

/// Documents fetched per page during a collection scan.
const SCAN_PAGE_SIZE: u32 = 300;

/// Records held by the in-memory backend.
#[derive(Debug, Default)]
struct MemoryStore {
    athletes: Vec<StoredAthlete>,
    activities: Vec<StoredActivity>,
}

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(Arc<RwLock<MemoryStore>>),
    Offline,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    backend: Backend,
    athletes_collection: String,
    activities_collection: String,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self::with_backend(Backend::Firestore(client)))
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self::with_backend(Backend::Firestore(client)))
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self::with_backend(Backend::Offline)
    }

    /// Create an in-memory store seeded with records (tests and local demos).
    pub fn new_in_memory(athletes: Vec<StoredAthlete>, activities: Vec<StoredActivity>) -> Self {
        Self::with_backend(Backend::Memory(Arc::new(RwLock::new(MemoryStore {
            athletes,
            activities,
        }))))
    }

    fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            athletes_collection: collections::ATHLETES.to_string(),
            activities_collection: collections::ACTIVITIES.to_string(),
        }
    }

    /// Read from and write to non-default collections.
    pub fn with_collections(mut self, athletes: &str, activities: &str) -> Self {
        self.athletes_collection = athletes.to_string();
        self.activities_collection = activities.to_string();
        self
    }

    // ─── Athlete Operations ──────────────────────────────────────

    /// Fetch every stored athlete.
    pub async fn list_athletes(&self) -> Result<Vec<StoredAthlete>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => scan_collection(client, &self.athletes_collection).await,
            Backend::Memory(store) => Ok(store.read().await.athletes.clone()),
            Backend::Offline => Err(offline_error()),
        }
    }

    /// Create or update an athlete.
    ///
    /// The dashboard never writes; this seeds a store for local runs and
    /// the integration tests. Production data comes from the ingest job.
    pub async fn upsert_athlete(&self, athlete: &StoredAthlete) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(&self.athletes_collection)
                    .document_id(athlete.athlete_id.to_string())
                    .object(athlete)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
            Backend::Memory(store) => {
                let mut store = store.write().await;
                store.athletes.retain(|a| a.athlete_id != athlete.athlete_id);
                store.athletes.push(athlete.clone());
            }
            Backend::Offline => return Err(offline_error()),
        }

        tracing::debug!(athlete_id = athlete.athlete_id, "Athlete stored");
        Ok(())
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Fetch every stored activity.
    pub async fn list_activities(&self) -> Result<Vec<StoredActivity>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                scan_collection(client, &self.activities_collection).await
            }
            Backend::Memory(store) => Ok(store.read().await.activities.clone()),
            Backend::Offline => Err(offline_error()),
        }
    }

    /// Store an activity, replacing any earlier version.
    ///
    /// Seeding helper, like [`FirestoreDb::upsert_athlete`].
    pub async fn set_activity(&self, activity: &StoredActivity) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(&self.activities_collection)
                    .document_id(activity.activity_id.to_string())
                    .object(activity)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
            Backend::Memory(store) => {
                let mut store = store.write().await;
                store
                    .activities
                    .retain(|a| a.activity_id != activity.activity_id);
                store.activities.push(activity.clone());
            }
            Backend::Offline => return Err(offline_error()),
        }

        tracing::debug!(activity_id = activity.activity_id, "Activity stored");
        Ok(())
    }
}

fn offline_error() -> AppError {
    AppError::Database("Database not connected (offline mode)".to_string())
}

/// Read a whole collection, one page at a time, until a short page.
async fn scan_collection<T>(
    client: &firestore::FirestoreDb,
    collection: &str,
) -> Result<Vec<T>, AppError>
where
    T: for<'de> Deserialize<'de> + Send,
{
    let mut items = Vec::new();
    let mut offset = 0;

    loop {
        let page: Vec<T> = client
            .fluent()
            .select()
            .from(collection)
            .limit(SCAN_PAGE_SIZE)
            .offset(offset)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(format!("Failed to scan {}: {}", collection, e)))?;

        let fetched = page.len();
        items.extend(page);

        if fetched < SCAN_PAGE_SIZE as usize {
            break;
        }
        offset += SCAN_PAGE_SIZE;
    }

    tracing::debug!(collection, count = items.len(), "Collection scanned");
    Ok(items)
}
