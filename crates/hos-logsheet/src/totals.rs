//! Daily hour totals of a log sheet.

use hos_core::{DutyEntry, DutyStatus};

/// Hours per duty line for one calendar day.
///
/// `on_duty_hours` is the recap figure: DRIVING plus ON_DUTY_NOT_DRIVING.
/// Each entry counts wholly toward the day it starts on, so a restart that
/// starts at 09:00 reports 34 off-duty hours on that day.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyTotals {
    pub driving_hours:  f64,
    pub on_duty_hours:  f64,
    pub off_duty_hours: f64,
    pub sleeper_hours:  f64,
}

impl DailyTotals {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a DutyEntry>) -> Self {
        let mut totals = Self::default();
        for entry in entries {
            totals.add(entry);
        }
        totals
    }

    pub fn add(&mut self, entry: &DutyEntry) {
        let hours = entry.duration_hours();
        match entry.duty_status {
            DutyStatus::Driving => {
                self.driving_hours += hours;
                self.on_duty_hours += hours;
            }
            DutyStatus::OnDutyNotDriving => self.on_duty_hours  += hours,
            DutyStatus::OffDuty          => self.off_duty_hours += hours,
            DutyStatus::Sleeper          => self.sleeper_hours  += hours,
        }
    }

    /// Sum of all four lines, counting driving once.
    pub fn total_hours(&self) -> f64 {
        self.on_duty_hours + self.off_duty_hours + self.sleeper_hours
    }
}
