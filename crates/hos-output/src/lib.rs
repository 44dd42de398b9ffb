//! `hos-output`: trip log writers for the ELD workspace.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                                  |
//! |-----------|---------|----------------------------------------------------------------|
//! | *(none)*  | CSV     | `duty_entries.csv`, `logsheet_days.csv`, `trip_summary.csv`    |
//! | `json`    | JSON    | `trip_log.json`                                                |
//!
//! Both implement [`OutputWriter`] and are driven by [`TripOutputObserver`],
//! which implements `hos_engine::EngineObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hos_output::{CsvWriter, TripOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TripOutputObserver::new(writer);
//! planner.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "json")]
pub mod json;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TripOutputObserver;
pub use row::{DutyEntryRow, LogSheetRow, TIMESTAMP_FORMAT, TripSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "json")]
pub use json::JsonWriter;
