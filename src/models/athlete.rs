// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete model for storage and the name lookup.

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Strava athlete ID.
pub type AthleteId = u64;

/// Athlete record as stored in the `athlete_credentials` collection.
///
/// `data` is the raw Strava athlete JSON, kept as a string so the store
/// never needs to know its shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAthlete {
    /// Strava athlete ID (also used as document ID)
    pub athlete_id: AthleteId,
    /// Strava athlete profile JSON
    pub data: String,
}

/// The subset of the Strava athlete profile we use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// Profile picture URL
    pub profile: Option<String>,
}

/// Athlete record after parsing at the storage boundary.
#[derive(Debug, Clone)]
pub struct AthleteRecord {
    pub athlete_id: AthleteId,
    pub profile: AthleteProfile,
}

impl AthleteRecord {
    pub fn new(athlete_id: AthleteId, profile: AthleteProfile) -> Self {
        Self {
            athlete_id,
            profile,
        }
    }
}

impl TryFrom<&StoredAthlete> for AthleteRecord {
    type Error = TransformError;

    fn try_from(stored: &StoredAthlete) -> Result<Self, Self::Error> {
        let profile = serde_json::from_str(&stored.data).map_err(|e| {
            TransformError::MalformedProfile {
                athlete_id: stored.athlete_id,
                reason: format!("profile is not valid JSON: {}", e),
            }
        })?;

        Ok(Self {
            athlete_id: stored.athlete_id,
            profile,
        })
    }
}

/// Parse every stored athlete.
///
/// A single bad profile fails the whole batch: every view depends on the
/// name lookup, so there is nothing useful to render without it.
pub fn parse_athletes(stored: &[StoredAthlete]) -> Result<Vec<AthleteRecord>, TransformError> {
    stored.iter().map(AthleteRecord::try_from).collect()
}
