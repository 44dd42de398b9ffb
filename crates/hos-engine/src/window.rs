//! Trailing duty-window accounting.
//!
//! # Model
//!
//! ```text
//! events  = on-duty stretches recorded since the last reset, in start order
//! inside  = events with start ≥ T − span           (span = 14 h by default)
//! totals  = Σ minutes of inside events, split into driving / all on-duty
//! ```
//!
//! Queries are monotonic in `T`, so the first inside event can only move
//! forward.  [`WindowTracker`] keeps a cursor on it and subtracts events from
//! the running sums as they fall out, giving amortised O(1) per query over a
//! whole trip.  A reset jumps the cursor to the end of the log.

use chrono::{Duration, NaiveDateTime};

/// One recorded on-duty stretch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WindowEvent {
    start:   NaiveDateTime,
    minutes: i64,
    driving: bool,
}

/// Driving and on-duty minutes inside the window at some instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowTotals {
    pub driving_minutes: i64,
    /// Includes driving.
    pub on_duty_minutes: i64,
}

/// Append-only event log with a monotonic cursor.
#[derive(Clone, Debug)]
pub struct WindowTracker {
    span:    Duration,
    events:  Vec<WindowEvent>,
    /// Index of the first event still inside the window.
    cursor:  usize,
    totals:  WindowTotals,
    /// Latest instant passed to `advance_to`.
    horizon: Option<NaiveDateTime>,
}

impl WindowTracker {
    pub fn new(span_minutes: i64) -> Self {
        Self {
            span:    Duration::minutes(span_minutes),
            events:  Vec::new(),
            cursor:  0,
            totals:  WindowTotals::default(),
            horizon: None,
        }
    }

    /// Record an on-duty stretch.  Off-duty time is never recorded.
    pub fn record(&mut self, start: NaiveDateTime, minutes: i64, driving: bool) {
        debug_assert!(
            self.events.last().is_none_or(|e| e.start <= start),
            "window events must be recorded in start order"
        );
        self.events.push(WindowEvent { start, minutes, driving });
        self.totals.on_duty_minutes += minutes;
        if driving {
            self.totals.driving_minutes += minutes;
        }
    }

    /// Drop every event that started before `at − span`.
    ///
    /// `at` must not precede an instant already passed in; earlier instants
    /// are clamped to the latest one.
    pub fn advance_to(&mut self, at: NaiveDateTime) {
        let at = match self.horizon {
            Some(h) if at < h => h,
            _ => at,
        };
        self.horizon = Some(at);

        let Some(floor) = at.checked_sub_signed(self.span) else {
            return;
        };
        while let Some(event) = self.events.get(self.cursor) {
            if event.start >= floor {
                break;
            }
            self.totals.on_duty_minutes -= event.minutes;
            if event.driving {
                self.totals.driving_minutes -= event.minutes;
            }
            self.cursor += 1;
        }
    }

    /// Totals inside the window ending at `at`.
    pub fn totals_at(&mut self, at: NaiveDateTime) -> WindowTotals {
        self.advance_to(at);
        self.totals
    }

    /// Totals as of the last [`advance_to`][Self::advance_to], plus anything
    /// recorded since.
    #[inline]
    pub fn totals(&self) -> WindowTotals {
        self.totals
    }

    /// Open a fresh window: nothing recorded so far counts any more.
    pub fn reset(&mut self) {
        self.cursor = self.events.len();
        self.totals = WindowTotals::default();
    }

    /// Number of events currently inside the window.
    pub fn len(&self) -> usize {
        self.events.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` once either window limit is reached.
    pub fn is_exhausted(&self, max_driving_minutes: i64, max_on_duty_minutes: i64) -> bool {
        self.totals.driving_minutes >= max_driving_minutes
            || self.totals.on_duty_minutes >= max_on_duty_minutes
    }
}
