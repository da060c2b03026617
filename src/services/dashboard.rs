// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard assembly.
//!
//! Handles the read path:
//! 1. Scan athletes and activities from Firestore
//! 2. Parse the stored JSON payloads once
//! 3. Run the ranking, feed and best-effort transforms
//! 4. Compute challenge progress from the ranking

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::Config;
use crate::db::FirestoreDb;
use crate::error::{AppError, RecordWarning, TransformError};
use crate::models::{
    parse_activities, parse_athletes, ActivityRecord, ActivityRow, AthleteRecord, AthleteSummary,
    ChallengeProgress, EffortRow, StoredActivity, StoredAthlete, Transformed,
};
use crate::services::{aggregate_ranking, flatten_activities, reduce_best_efforts};

/// Parsed club data, ready for the transforms.
#[derive(Debug, Clone, Default)]
pub struct ClubData {
    pub athletes: Vec<AthleteRecord>,
    pub activities: Vec<ActivityRecord>,
    /// Activities that could not be parsed
    pub warnings: Vec<RecordWarning>,
}

impl ClubData {
    /// Parse stored records.
    ///
    /// Fails if any athlete profile is malformed; bad activities become
    /// warnings.
    pub fn from_stored(
        athletes: &[StoredAthlete],
        activities: &[StoredActivity],
    ) -> Result<Self, TransformError> {
        let athletes = parse_athletes(athletes)?;
        let (activities, warnings) = parse_activities(activities);

        Ok(Self {
            athletes,
            activities,
            warnings,
        })
    }

    /// Load and parse everything from the store.
    pub async fn load(db: &FirestoreDb) -> Result<Self, AppError> {
        let athletes = db.list_athletes().await?;
        let activities = db.list_activities().await?;

        tracing::info!(
            athletes = athletes.len(),
            activities = activities.len(),
            "Loaded club data"
        );

        Ok(Self::from_stored(&athletes, &activities)?)
    }

    pub fn ranking(&self, config: &Config) -> Result<Transformed<AthleteSummary>, TransformError> {
        Ok(self.with_parse_warnings(self.ranking_view(config)?))
    }

    pub fn feed(&self, config: &Config) -> Result<Transformed<ActivityRow>, TransformError> {
        Ok(self.with_parse_warnings(self.feed_view(config)?))
    }

    pub fn best_efforts(&self, config: &Config) -> Result<Transformed<EffortRow>, TransformError> {
        Ok(self.with_parse_warnings(self.best_efforts_view(config)?))
    }

    fn ranking_view(&self, config: &Config) -> Result<Transformed<AthleteSummary>, TransformError> {
        aggregate_ranking(
            &self.athletes,
            &self.activities,
            &config.excluded_athlete_ids,
            &config.run_type,
        )
    }

    fn feed_view(&self, config: &Config) -> Result<Transformed<ActivityRow>, TransformError> {
        flatten_activities(
            &self.athletes,
            &self.activities,
            &config.excluded_athlete_ids,
            &config.run_type,
        )
    }

    fn best_efforts_view(&self, config: &Config) -> Result<Transformed<EffortRow>, TransformError> {
        reduce_best_efforts(
            &self.athletes,
            &self.activities,
            &config.best_efforts_exclusions(),
        )
    }

    /// Prepend the parse warnings so every view reports skipped activities.
    fn with_parse_warnings<T>(&self, view: Transformed<T>) -> Transformed<T> {
        let mut warnings = self.warnings.clone();
        warnings.extend(view.warnings);
        Transformed::new(view.rows, warnings)
    }
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Dashboard {
    pub title: String,
    pub challenge: ChallengeProgress,
    pub ranking: Vec<AthleteSummary>,
    pub activities: Vec<ActivityRow>,
    pub best_efforts: Vec<EffortRow>,
    /// Records that were skipped or shown degraded
    pub warnings: Vec<RecordWarning>,
}

impl Dashboard {
    /// Build the full dashboard. `today` drives the challenge week only.
    pub fn build(
        config: &Config,
        data: &ClubData,
        today: NaiveDate,
    ) -> Result<Self, TransformError> {
        let ranking = data.ranking_view(config)?;
        let feed = data.feed_view(config)?;
        let best = data.best_efforts_view(config)?;

        let challenge =
            ChallengeProgress::compute(&config.challenge, &ranking.rows, &feed.rows, today);

        let mut warnings = data.warnings.clone();
        warnings.extend(ranking.warnings);
        warnings.extend(feed.warnings);
        warnings.extend(best.warnings);

        if !warnings.is_empty() {
            tracing::warn!(count = warnings.len(), "Dashboard built with skipped records");
        }

        Ok(Self {
            title: config.club_name.clone(),
            challenge,
            ranking: ranking.rows,
            activities: feed.rows,
            best_efforts: best.rows,
            warnings,
        })
    }
}
