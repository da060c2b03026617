// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pace and duration labels shown in the dashboard tables.

use crate::error::PaceError;

/// Label shown in place of a pace that cannot be computed.
pub const PACE_UNAVAILABLE: &str = "n/a";

/// Label shown for negative durations.
pub const INVALID_TIME: &str = "Invalid time";

/// Average pace as `"{minutes}:{seconds:02} /km"`.
///
/// Seconds are rounded to the nearest whole second; a value that rounds up
/// to 60 carries into the minutes. A negative or non-finite time has no pace.
pub fn pace_from_distance_time(distance_m: f64, time_s: f64) -> Result<String, PaceError> {
    if distance_m == 0.0 {
        return Err(PaceError::DivisionByZero);
    }
    if !time_s.is_finite() || time_s < 0.0 {
        return Err(PaceError::InvalidTime);
    }

    let pace_min_per_km = (time_s / 60.0) / (distance_m / 1000.0);
    if !pace_min_per_km.is_finite() {
        return Err(PaceError::DivisionByZero);
    }

    let mut minutes = pace_min_per_km.floor() as i64;
    let mut seconds = ((pace_min_per_km - minutes as f64) * 60.0).round() as i64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }

    Ok(format!("{}:{:02} /km", minutes, seconds))
}

/// Format a duration: `"1u 5m"` from one hour up, `"59m 59s"` below that.
pub fn format_time(seconds: i64) -> String {
    if seconds < 0 {
        return INVALID_TIME.to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{}u {}m", hours, minutes)
    } else {
        format!("{}m {}s", minutes, seconds % 60)
    }
}
