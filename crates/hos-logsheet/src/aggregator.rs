//! Grouping of a trip's duty entries into per-day log sheets.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use hos_core::DutyEntry;

use crate::{DailyTotals, StatusGrid};

/// One calendar day's log sheet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogSheetDay {
    pub date:      NaiveDate,
    /// Days since the trip's start date.
    pub day_index: i64,
    pub grid:      StatusGrid,
    pub totals:    DailyTotals,
    /// Entries that start on `date`, in start order.
    pub entries:   Vec<DutyEntry>,
}

/// Builds [`LogSheetDay`]s from a flat entry list.
///
/// A sheet exists for every date on which at least one entry *starts*.  A
/// date that is entirely covered by an entry started earlier (the middle day
/// of a long restart, say) gets no sheet.
#[derive(Clone, Copy, Debug, Default)]
pub struct DayAggregator;

impl DayAggregator {
    /// Aggregate `entries` into sheets ordered by date.
    ///
    /// Entries need not be sorted.  The grid of each day is sampled against
    /// *all* entries, so an OFF_DUTY restart carried over from the previous
    /// day still paints the morning of the next sheet.
    pub fn aggregate(&self, entries: &[DutyEntry]) -> Vec<LogSheetDay> {
        let mut sorted = entries.to_vec();
        sorted.sort_by_key(|e| e.start);

        let mut by_date: BTreeMap<NaiveDate, Vec<DutyEntry>> = BTreeMap::new();
        for entry in &sorted {
            by_date.entry(entry.start.date()).or_default().push(entry.clone());
        }

        by_date
            .into_iter()
            .map(|(date, day_entries)| LogSheetDay {
                date,
                day_index: day_entries[0].day_index,
                grid:      StatusGrid::build(date, &sorted),
                totals:    DailyTotals::from_entries(&day_entries),
                entries:   day_entries,
            })
            .collect()
    }
}

/// Shorthand for `DayAggregator.aggregate(entries)`.
pub fn aggregate_days(entries: &[DutyEntry]) -> Vec<LogSheetDay> {
    DayAggregator.aggregate(entries)
}
