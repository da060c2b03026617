// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod best_efforts;
pub mod dashboard;
pub mod feed;
pub mod names;
pub mod ranking;

pub use best_efforts::reduce_best_efforts;
pub use dashboard::{ClubData, Dashboard};
pub use feed::flatten_activities;
pub use names::{resolve_directory, resolve_names, AthleteDirectory, AthleteIdentity};
pub use ranking::aggregate_ranking;
