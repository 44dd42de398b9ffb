//! `hos-logsheet`: per-day record-of-duty-status sheets.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`grid`]        | `StatusGrid` (96 × 15-minute slots), slot constants    |
//! | [`totals`]      | `DailyTotals` (hours per duty line)                    |
//! | [`aggregator`]  | `LogSheetDay`, `DayAggregator`, `aggregate_days`       |
//!
//! # Day model (summary)
//!
//! ```text
//! sheet dates  = distinct start dates of the entries
//! grid(date)   = status of any entry covering each slot start, else OFF_DUTY
//! totals(date) = Σ hours of entries that START on date (not split at midnight)
//! ```

pub mod aggregator;
pub mod grid;
pub mod totals;


pub use aggregator::{DayAggregator, LogSheetDay, aggregate_days};
pub use grid::{SLOT_MINUTES, SLOTS_PER_DAY, StatusGrid};
pub use totals::DailyTotals;
