//! Trip time model.
//!
//! # Design
//!
//! All duty bookkeeping is done in whole **minutes** (`i64`).  Hours appear
//! only at the edges: the caller's `current_cycle_hours_used` input and the
//! hour totals reported on log sheets.  Integer minutes keep every limit
//! comparison exact, so "8 hours since the last break" is `480 >= 480`
//! rather than a float that lands a hair under.
//!
//! Timestamps are `chrono::NaiveDateTime` in the start time's own wall-clock
//! convention.  An RFC 3339 start with an offset is reduced to its local
//! reading; every later instant is derived from it by adding minutes, so the
//! whole trip shares one convention.

use chrono::{DateTime, NaiveDateTime};

use crate::{HosError, HosResult};

pub const MINUTES_PER_HOUR: i64 = 60;

/// Longest duration accepted for a leg, a limit, or prior cycle use: one
/// leap year.
pub const MAX_DURATION_MINUTES: i64 = 366 * 24 * MINUTES_PER_HOUR;

/// Convert caller-supplied fractional hours to whole minutes, rounding down.
///
/// A partial minute is never counted, so 69.995 h stays under a 70 h limit.
/// Float noise just below a whole minute (`1/3 h`) still counts as that
/// minute.
#[inline]
pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * MINUTES_PER_HOUR as f64 + 1e-9).floor() as i64
}

#[inline]
pub fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / MINUTES_PER_HOUR as f64
}

/// Parse an ISO-8601 start timestamp.
///
/// Accepts RFC 3339 (`2025-01-06T08:00:00Z`, `2025-01-06T08:00:00-05:00`)
/// and naive forms with or without seconds (`2025-01-06T08:00:00`,
/// `2025-01-06 08:00`).  Offsets are dropped after conversion to local
/// wall-clock time.
pub fn parse_start_time(input: &str) -> HosResult<NaiveDateTime> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }

    const NAIVE_FORMATS: [&str; 6] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    Err(HosError::InvalidStartTime {
        input:  input.to_owned(),
        reason: "expected RFC 3339 or YYYY-MM-DDTHH:MM[:SS]".to_owned(),
    })
}

/// Calendar days from the trip start's date to `at`'s date.
///
/// Day 0 is the start date regardless of the start's time of day.
#[inline]
pub fn day_index(trip_start: NaiveDateTime, at: NaiveDateTime) -> i64 {
    (at.date() - trip_start.date()).num_days()
}
