// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod athlete;
pub mod challenge;
pub mod rows;
pub mod stats;

pub use activity::{parse_activities, ActivityRecord, AthleteRef, BestEffort, StoredActivity};
pub use athlete::{parse_athletes, AthleteId, AthleteProfile, AthleteRecord, StoredAthlete};
pub use challenge::{ChallengeProgress, WeeklyProgress};
pub use rows::{ActivityRow, EffortRow, Transformed};
pub use stats::{AthleteSummary, RunningTally};
