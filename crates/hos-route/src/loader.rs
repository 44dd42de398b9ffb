//! CSV leg loader.
//!
//! # CSV format
//!
//! One row per leg, in travel order.
//!
//! ```csv
//! leg_index,distance_miles,duration_minutes,is_pickup,is_dropoff
//! 0,212.4,230,true,false
//! 1,1480.0,1610,false,true
//! ```
//!
//! `is_pickup` / `is_dropoff` accept `true`/`false` or `1`/`0` and may be
//! left empty (treated as `false`).  Rows are sorted by `leg_index`; the
//! indices must then run `0, 1, 2, …` without gaps.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use hos_core::Leg;

use crate::{RouteError, RouteResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LegRecord {
    leg_index:        usize,
    distance_miles:   f64,
    duration_minutes: i64,
    #[serde(default)]
    is_pickup:        Option<String>,
    #[serde(default)]
    is_dropoff:       Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load legs from a CSV file.
pub fn load_legs_csv(path: &Path) -> RouteResult<Vec<Leg>> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_legs_reader(file)
}

/// Like [`load_legs_csv`] but accepts any `Read` source.
///
/// Every leg is validated, so the result can go straight to the engine.
pub fn load_legs_reader<R: Read>(reader: R) -> RouteResult<Vec<Leg>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut legs = Vec::new();
    for result in csv_reader.deserialize::<LegRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        legs.push(Leg {
            index:            row.leg_index,
            distance_miles:   row.distance_miles,
            duration_minutes: row.duration_minutes,
            is_pickup:        parse_flag(row.is_pickup.as_deref(), "is_pickup")?,
            is_dropoff:       parse_flag(row.is_dropoff.as_deref(), "is_dropoff")?,
        });
    }

    legs.sort_by_key(|l| l.index);
    for (expected, leg) in legs.iter().enumerate() {
        if leg.index != expected {
            return Err(RouteError::Parse(format!(
                "leg indices must be contiguous from 0: expected {expected}, found {}",
                leg.index
            )));
        }
        leg.validate()?;
    }

    Ok(legs)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_flag(value: Option<&str>, column: &str) -> RouteResult<bool> {
    match value.map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(RouteError::Parse(format!(
            "invalid {column} {v:?}: expected true/false or 1/0"
        ))),
    }
}
