// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Run club tracker: a shared distance challenge on top of Strava data.
//!
//! This crate provides the backend API that turns stored Strava athletes
//! and activities into the club dashboard: a distance ranking, a feed of
//! recent runs and a table of personal bests per segment.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
