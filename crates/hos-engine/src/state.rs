//! Mutable counters carried through one trip simulation.

use chrono::NaiveDateTime;

use hos_core::minutes_to_hours;

use crate::WindowTracker;

/// Everything the rule engine knows about the driver at `clock`.
#[derive(Clone, Debug)]
pub struct SimulationState {
    /// End of the last emitted entry.
    pub clock:               NaiveDateTime,
    /// On-duty minutes in the rolling cycle, including the caller's prior use.
    pub cycle_minutes:       i64,
    /// Driving minutes since the last off-duty period of break length.
    pub driving_since_break: i64,
    pub window:              WindowTracker,
}

impl SimulationState {
    pub fn new(start: NaiveDateTime, cycle_minutes: i64, window_span_minutes: i64) -> Self {
        Self {
            clock:               start,
            cycle_minutes,
            driving_since_break: 0,
            window:              WindowTracker::new(window_span_minutes),
        }
    }

    #[inline]
    pub fn cycle_hours(&self) -> f64 {
        minutes_to_hours(self.cycle_minutes)
    }
}
