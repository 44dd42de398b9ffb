//! The planner's output.

use chrono::NaiveDateTime;

use hos_core::{DutyEntry, DutyStatus};
use hos_logsheet::LogSheetDay;

/// A planned trip: the entry stream and the log sheets built from it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripLog {
    pub start_time:        NaiveDateTime,
    /// Contiguous, in start order.
    pub entries:           Vec<DutyEntry>,
    /// One sheet per distinct entry start date.
    pub days:              Vec<LogSheetDay>,
    /// Cycle hours used after the last entry.
    pub final_cycle_hours: f64,
}

impl TripLog {
    /// End of the last entry, or the start time for an empty trip.
    pub fn end_time(&self) -> NaiveDateTime {
        self.entries.last().map_or(self.start_time, |e| e.end)
    }

    /// Total minutes recorded on `status`'s line.
    pub fn minutes_in(&self, status: DutyStatus) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.duty_status == status)
            .map(DutyEntry::duration_minutes)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
