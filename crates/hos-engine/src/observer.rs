//! Planning observer trait for progress reporting and streaming output.

use chrono::NaiveDateTime;

use hos_core::{DutyEntry, Leg};

use crate::TripLog;

/// Callbacks invoked by [`TripPlanner::run`][crate::TripPlanner::run] while
/// a trip is simulated.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: entry counter
///
/// ```rust,ignore
/// struct Counter { driving: usize }
///
/// impl EngineObserver for Counter {
///     fn on_entry(&mut self, entry: &DutyEntry) {
///         if entry.duty_status == DutyStatus::Driving {
///             self.driving += 1;
///         }
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called before any entry of `leg` is emitted; `at` is the current clock.
    fn on_leg_start(&mut self, _leg: &Leg, _at: NaiveDateTime) {}

    /// Called once per entry, in emission order, as soon as it is final.
    fn on_entry(&mut self, _entry: &DutyEntry) {}

    /// Called once after the last leg, with the aggregated log sheets.
    fn on_trip_end(&mut self, _log: &TripLog) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
