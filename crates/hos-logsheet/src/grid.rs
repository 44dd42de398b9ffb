//! The 24-hour, 15-minute-resolution duty status grid of one log sheet.
//!
//! # Slot model
//!
//! ```text
//! slot i covers [00:00 + 15·i min, 00:00 + 15·(i+1) min)     i ∈ 0..96
//! status(i)  = status of the entry whose [start, end) contains the slot start
//!            = OFF_DUTY if no entry does
//! ```
//!
//! Sampling at the slot start means a 10-minute fuel stop that begins at
//! 10:05 never shows on the grid; entries shorter than a slot are visible
//! only in the entry list.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use hos_core::{DutyEntry, DutyStatus};

pub const SLOT_MINUTES:  i64   = 15;
pub const SLOTS_PER_DAY: usize = 96;

/// A fixed-length run of 96 slot statuses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusGrid {
    /// Always `SLOTS_PER_DAY` long.
    slots: Vec<DutyStatus>,
}

impl Default for StatusGrid {
    fn default() -> Self {
        Self { slots: vec![DutyStatus::OffDuty; SLOTS_PER_DAY] }
    }
}

impl StatusGrid {
    /// Sample `entries` at every slot start of `date`.
    ///
    /// `entries` must be sorted by `start` and non-overlapping, as the
    /// engine emits them.  Entries from other dates are welcome: a restart
    /// that began yesterday still paints this morning's slots.
    pub fn build(date: NaiveDate, entries: &[DutyEntry]) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        let slots = (0..SLOTS_PER_DAY)
            .map(|i| status_at(entries, midnight + slot_offset(i)))
            .collect();
        Self { slots }
    }

    #[inline]
    pub fn slot(&self, index: usize) -> DutyStatus {
        self.slots[index]
    }

    pub fn slots(&self) -> &[DutyStatus] {
        &self.slots
    }

    /// `"HH:MM"` label of a slot's start, e.g. slot 37 → `"09:15"`.
    pub fn slot_label(index: usize) -> String {
        let minutes = index as i64 * SLOT_MINUTES;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }

    /// Minutes of the day drawn on `status`'s line.
    pub fn minutes_on(&self, status: DutyStatus) -> i64 {
        self.slots.iter().filter(|&&s| s == status).count() as i64 * SLOT_MINUTES
    }

    /// Maximal runs of equal status as `(first_slot, end_slot_exclusive, status)`.
    ///
    /// This is what a renderer draws: one horizontal segment per run, with
    /// vertical connectors between consecutive runs.
    pub fn runs(&self) -> Vec<(usize, usize, DutyStatus)> {
        let mut runs = Vec::new();
        let mut start = 0;
        for i in 1..=SLOTS_PER_DAY {
            if i == SLOTS_PER_DAY || self.slots[i] != self.slots[start] {
                runs.push((start, i, self.slots[start]));
                start = i;
            }
        }
        runs
    }

    /// 96 paper-log line digits, e.g. `"1111…3333…4444…"`.
    pub fn encode(&self) -> String {
        self.slots.iter().map(|s| char::from(b'0' + s.line())).collect()
    }

    /// Inverse of [`encode`][Self::encode]; `None` on wrong length or digit.
    pub fn decode(encoded: &str) -> Option<Self> {
        if encoded.len() != SLOTS_PER_DAY {
            return None;
        }
        let slots = encoded
            .bytes()
            .map(|b| b.checked_sub(b'0').and_then(DutyStatus::from_line))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { slots })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
fn slot_offset(index: usize) -> chrono::Duration {
    chrono::Duration::minutes(index as i64 * SLOT_MINUTES)
}

/// Status of the entry covering `at`; binary search over sorted starts.
fn status_at(entries: &[DutyEntry], at: NaiveDateTime) -> DutyStatus {
    let after = entries.partition_point(|e| e.start <= at);
    match after.checked_sub(1).map(|i| &entries[i]) {
        Some(entry) if entry.covers(at) => entry.duty_status,
        _ => DutyStatus::OffDuty,
    }
}
