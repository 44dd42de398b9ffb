//! `hos-core`: foundational types for the ELD hours-of-service workspace.
//!
//! This crate is a dependency of every other `hos-*` crate.  It has no
//! `hos-*` dependencies and minimal external ones (`chrono` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`duty`]   | `DutyStatus`, `EntryKind`, `HosRule`, `DutyEntry`         |
//! | [`leg`]    | `Leg` and its input validation                            |
//! | [`config`] | `HosLimits` (every regulatory constant, FMCSA defaults)   |
//! | [`time`]   | minute arithmetic, start-time parsing, day indices        |
//! | [`geo`]    | `GeoPoint`, haversine distance in miles                   |
//! | [`error`]  | `HosError`, `HosResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod duty;
pub mod error;
pub mod geo;
pub mod leg;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{HosLimits, MIN_FUEL_INTERVAL_MILES};
pub use duty::{DutyEntry, DutyStatus, EntryKind, HosRule};
pub use error::{HosError, HosResult};
pub use geo::GeoPoint;
pub use leg::{Leg, MAX_LEG_MILES, validate_legs};
pub use time::{MAX_DURATION_MINUTES, day_index, hours_to_minutes, minutes_to_hours, parse_start_time};
