//! Plain data row types written by output backends.

use hos_core::DutyEntry;
use hos_engine::TripLog;
use hos_logsheet::LogSheetDay;

/// Timestamp layout shared by every backend.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One duty entry, flattened for tabular output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct DutyEntryRow {
    pub day_index:    i64,
    pub start:        String,
    pub end:          String,
    pub duty_status:  &'static str,
    pub minutes:      i64,
    pub note:         String,
    pub rule_applied: &'static str,
    pub explanation:  String,
}

impl From<&DutyEntry> for DutyEntryRow {
    fn from(e: &DutyEntry) -> Self {
        Self {
            day_index:    e.day_index,
            start:        e.start.format(TIMESTAMP_FORMAT).to_string(),
            end:          e.end.format(TIMESTAMP_FORMAT).to_string(),
            duty_status:  e.duty_status.as_str(),
            minutes:      e.duration_minutes(),
            note:         e.note.clone(),
            rule_applied: e.rule_applied(),
            explanation:  e.explanation.clone(),
        }
    }
}

/// One log sheet: date, totals, and the grid as 96 line digits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct LogSheetRow {
    pub day_index:      i64,
    pub date:           String,
    pub driving_hours:  f64,
    pub on_duty_hours:  f64,
    pub off_duty_hours: f64,
    pub sleeper_hours:  f64,
    /// `'1'` off duty, `'2'` sleeper, `'3'` driving, `'4'` on duty.
    pub grid:           String,
}

impl From<&LogSheetDay> for LogSheetRow {
    fn from(d: &LogSheetDay) -> Self {
        Self {
            day_index:      d.day_index,
            date:           d.date.format("%Y-%m-%d").to_string(),
            driving_hours:  d.totals.driving_hours,
            on_duty_hours:  d.totals.on_duty_hours,
            off_duty_hours: d.totals.off_duty_hours,
            sleeper_hours:  d.totals.sleeper_hours,
            grid:           d.grid.encode(),
        }
    }
}

/// Whole-trip summary written once at the end.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct TripSummaryRow {
    pub start_time:        String,
    pub end_time:          String,
    pub entries:           usize,
    pub days:              usize,
    pub driving_minutes:   i64,
    pub final_cycle_hours: f64,
}

impl From<&TripLog> for TripSummaryRow {
    fn from(log: &TripLog) -> Self {
        Self {
            start_time:        log.start_time.format(TIMESTAMP_FORMAT).to_string(),
            end_time:          log.end_time().format(TIMESTAMP_FORMAT).to_string(),
            entries:           log.entries.len(),
            days:              log.days.len(),
            driving_minutes:   log.minutes_in(hos_core::DutyStatus::Driving),
            final_cycle_hours: log.final_cycle_hours,
        }
    }
}
