// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and challenge weeks.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Strava's `start_date_local` format. The `Z` suffix is a lie (the time is
/// local wall-clock time) so it is parsed as a naive timestamp.
const STRAVA_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a Strava `start_date_local` string.
///
/// Falls back to RFC3339 (keeping the wall-clock time) for records written
/// with an explicit offset. Returns `None` for anything else.
pub fn parse_start_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, STRAVA_LOCAL_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Number of weeks between an ISO (year, week) and `today`.
///
/// Years are counted as 52 weeks, so the result drifts by one week across a
/// 53-week ISO year.
pub fn weeks_since(start_year: i32, start_week: u32, today: NaiveDate) -> i64 {
    let iso = today.iso_week();
    let years = i64::from(iso.year() - start_year);
    years * 52 + (i64::from(iso.week()) - i64::from(start_week))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_strava_local_format() {
        let parsed = parse_start_date("2024-03-02T09:15:00Z").unwrap();
        assert_eq!(parsed.to_string(), "2024-03-02 09:15:00");
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        let parsed = parse_start_date("2024-03-02T09:15:00+02:00").unwrap();
        assert_eq!(parsed.to_string(), "2024-03-02 09:15:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_start_date("").is_none());
        assert!(parse_start_date("yesterday").is_none());
        assert!(parse_start_date("2024-03-02").is_none());
    }

    #[test]
    fn test_weeks_since_same_year() {
        // 2024-03-04 is ISO week 10
        assert_eq!(weeks_since(2024, 7, date(2024, 3, 4)), 3);
        assert_eq!(weeks_since(2024, 10, date(2024, 3, 4)), 0);
    }

    #[test]
    fn test_weeks_since_across_years() {
        // 2025-01-08 is ISO week 2 of 2025
        assert_eq!(weeks_since(2024, 40, date(2025, 1, 8)), 14);
    }

    #[test]
    fn test_weeks_since_uses_iso_year() {
        // 2024-12-30 belongs to ISO week 1 of 2025
        assert_eq!(weeks_since(2024, 52, date(2024, 12, 30)), 1);
    }

    #[test]
    fn test_weeks_since_before_start_is_negative() {
        assert_eq!(weeks_since(2024, 20, date(2024, 3, 4)), -10);
    }
}
