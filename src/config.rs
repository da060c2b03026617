// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::collections::HashSet;
use std::env;
use std::str::FromStr;

use crate::db::collections;
use crate::models::AthleteId;

/// Challenge parameters shown in the progress header.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeConfig {
    /// ISO year the challenge started in
    pub start_year: i32,
    /// ISO week the challenge started in
    pub start_week: u32,
    /// Challenge length in weeks
    pub total_weeks: u32,
    /// Club distance goal in km
    pub goal_km: f64,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Collection holding athlete profiles
    pub athletes_collection: String,
    /// Collection holding activities
    pub activities_collection: String,
    /// Dashboard title
    pub club_name: String,
    pub challenge: ChallengeConfig,
    /// Athletes left out of the club totals (organizers, guests)
    pub excluded_athlete_ids: HashSet<AthleteId>,
    /// Sport type that counts toward the challenge
    pub run_type: String,
    /// Whether the best-effort table also drops excluded athletes
    pub best_efforts_apply_exclusions: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            athletes_collection: collections::ATHLETES.to_string(),
            activities_collection: collections::ACTIVITIES.to_string(),
            club_name: "Test Run Club".to_string(),
            challenge: ChallengeConfig {
                start_year: 2024,
                start_week: 10,
                total_weeks: 26,
                goal_km: 2500.0,
            },
            excluded_athlete_ids: HashSet::new(),
            run_type: "Run".to_string(),
            best_efforts_apply_exclusions: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            athletes_collection: env::var("ATHLETES_COLLECTION")
                .unwrap_or_else(|_| collections::ATHLETES.to_string()),
            activities_collection: env::var("ACTIVITIES_COLLECTION")
                .unwrap_or_else(|_| collections::ACTIVITIES.to_string()),
            club_name: env::var("CLUB_NAME").unwrap_or_else(|_| "Run Club".to_string()),
            challenge: ChallengeConfig {
                start_year: required("CHALLENGE_START_YEAR")?,
                start_week: required("CHALLENGE_START_WEEK")?,
                total_weeks: required("CHALLENGE_TOTAL_WEEKS")?,
                goal_km: required("CHALLENGE_TOTAL_KM")?,
            },
            excluded_athlete_ids: parse_id_list(
                &env::var("EXCLUDED_ATHLETE_IDS").unwrap_or_default(),
            )?,
            run_type: env::var("RUN_TYPE").unwrap_or_else(|_| "Run".to_string()),
            best_efforts_apply_exclusions: match env::var("BEST_EFFORTS_APPLY_EXCLUSIONS") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("BEST_EFFORTS_APPLY_EXCLUSIONS", raw))?,
                Err(_) => true,
            },
        })
    }

    /// Athletes to drop from the best-effort table.
    pub fn best_efforts_exclusions(&self) -> HashSet<AthleteId> {
        if self.best_efforts_apply_exclusions {
            self.excluded_athlete_ids.clone()
        } else {
            HashSet::new()
        }
    }
}

/// Read and parse a required environment variable.
fn required<T: FromStr>(name: &'static str) -> Result<T, ConfigError> {
    let raw = env::var(name).map_err(|_| ConfigError::Missing(name))?;
    raw.trim().parse().map_err(|_| ConfigError::Invalid(name, raw))
}

/// Parse a comma separated list of athlete IDs. Blank entries are ignored.
fn parse_id_list(raw: &str) -> Result<HashSet<AthleteId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .map_err(|_| ConfigError::Invalid("EXCLUDED_ATHLETE_IDS", s.to_string()))
        })
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("CHALLENGE_START_YEAR", "2024");
        env::set_var("CHALLENGE_START_WEEK", "36");
        env::set_var("CHALLENGE_TOTAL_WEEKS", "26");
        env::set_var("CHALLENGE_TOTAL_KM", "3000");
        env::set_var("EXCLUDED_ATHLETE_IDS", "111, 222,");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.challenge.start_year, 2024);
        assert_eq!(config.challenge.start_week, 36);
        assert_eq!(config.challenge.goal_km, 3000.0);
        assert_eq!(config.excluded_athlete_ids, HashSet::from([111, 222]));
        assert_eq!(config.run_type, "Run");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_parse_id_list() {
        assert!(parse_id_list("").unwrap().is_empty());
        assert_eq!(parse_id_list(" 5 ").unwrap(), HashSet::from([5]));
        assert!(matches!(
            parse_id_list("5,abc"),
            Err(ConfigError::Invalid("EXCLUDED_ATHLETE_IDS", _))
        ));
    }
}
