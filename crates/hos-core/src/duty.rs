//! Duty statuses, the rules that produce them, and the emitted `DutyEntry`.
//!
//! An entry is a plain field struct built from a tagged [`EntryKind`].  The
//! kind decides the duty status, the rule citation, and the human-readable
//! note/explanation, so every entry of a given kind reads identically no
//! matter which branch of the engine produced it.

use std::fmt;

use chrono::NaiveDateTime;

use crate::time::day_index;

// ── DutyStatus ────────────────────────────────────────────────────────────────

/// The four lines of a record-of-duty-status grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DutyStatus {
    /// Line 1.  Also the grid default for uncovered slots.
    #[default]
    OffDuty,
    /// Line 2.
    Sleeper,
    /// Line 3.
    Driving,
    /// Line 4.
    OnDutyNotDriving,
}

impl DutyStatus {
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// `true` for statuses that count toward the 14-hour window and the
    /// 70-hour cycle.
    #[inline]
    pub fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDutyNotDriving)
    }

    /// Wire label, matching the stored record format.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty          => "OFF_DUTY",
            DutyStatus::Sleeper          => "SLEEPER",
            DutyStatus::Driving          => "DRIVING",
            DutyStatus::OnDutyNotDriving => "ON_DUTY_NOT_DRIVING",
        }
    }

    /// Paper-log line number, used for the compact grid encoding.
    pub fn line(self) -> u8 {
        match self {
            DutyStatus::OffDuty          => 1,
            DutyStatus::Sleeper          => 2,
            DutyStatus::Driving          => 3,
            DutyStatus::OnDutyNotDriving => 4,
        }
    }

    pub fn from_line(line: u8) -> Option<DutyStatus> {
        DutyStatus::ALL.into_iter().find(|s| s.line() == line)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HosRule ───────────────────────────────────────────────────────────────────

/// The regulation an entry is recorded under.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HosRule {
    /// Driving time within the daily driving limit.
    DrivingLimit,
    /// On-duty, not-driving work inside the duty window.
    DutyWindow,
    /// Off-duty periods that clear the window or the cycle.
    OffDutyReset,
    /// The 30-minute interruption after 8 cumulative driving hours.
    DrivingBreak,
}

impl HosRule {
    pub fn citation(self) -> &'static str {
        match self {
            HosRule::DrivingLimit => "FMCSA 395.3(a)(1)",
            HosRule::DutyWindow   => "FMCSA 395.3(a)(2)",
            HosRule::OffDutyReset => "FMCSA 395.3(a)(3)(i)",
            HosRule::DrivingBreak => "FMCSA 395.3(a)(3)(ii)",
        }
    }
}

impl fmt::Display for HosRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.citation())
    }
}

// ── EntryKind ─────────────────────────────────────────────────────────────────

/// What an entry records.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryKind {
    /// Driving on the leg with this zero-based index.
    Driving { leg_index: usize },
    /// Loading at the pickup.
    Pickup,
    /// Unloading at the dropoff.
    Dropoff,
    /// Refuelling once the leg passes `at_mile`.
    FuelStop { at_mile: f64 },
    /// 30-minute break after 8 driving hours.
    Break,
    /// 10-hour rest that opens a fresh 14-hour window.
    DailyRest,
    /// 34-hour restart that zeroes the 70-hour cycle.
    Restart,
}

impl EntryKind {
    pub fn status(&self) -> DutyStatus {
        match self {
            EntryKind::Driving { .. } => DutyStatus::Driving,
            EntryKind::Pickup | EntryKind::Dropoff | EntryKind::FuelStop { .. } => {
                DutyStatus::OnDutyNotDriving
            }
            EntryKind::Break | EntryKind::DailyRest | EntryKind::Restart => DutyStatus::OffDuty,
        }
    }

    pub fn rule(&self) -> HosRule {
        match self {
            EntryKind::Driving { .. } => HosRule::DrivingLimit,
            EntryKind::Pickup | EntryKind::Dropoff | EntryKind::FuelStop { .. } => {
                HosRule::DutyWindow
            }
            EntryKind::Break => HosRule::DrivingBreak,
            EntryKind::DailyRest | EntryKind::Restart => HosRule::OffDutyReset,
        }
    }

    /// `true` for off-duty periods that reset hours-of-service counters.
    pub fn is_reset(&self) -> bool {
        matches!(self, EntryKind::Break | EntryKind::DailyRest | EntryKind::Restart)
    }

    fn note(&self) -> String {
        match self {
            EntryKind::Driving { leg_index } => format!("Driving leg {}", leg_index + 1),
            EntryKind::Pickup                => "Pickup duty time".to_owned(),
            EntryKind::Dropoff               => "Dropoff duty time".to_owned(),
            EntryKind::FuelStop { at_mile }  => format!("Fuel stop at {at_mile:.0} miles"),
            EntryKind::Break     => "Required 30-minute break after 8 hours driving".to_owned(),
            EntryKind::DailyRest => "Required rest to reset 14-hour window".to_owned(),
            EntryKind::Restart   => "Required 34-hour restart after 70-hour cycle".to_owned(),
        }
    }

    fn explanation(&self, minutes: i64) -> String {
        match self {
            EntryKind::Driving { .. } => format!("Driving for {minutes} minutes"),
            EntryKind::Pickup  => format!("Required {minutes} minutes for pickup operations"),
            EntryKind::Dropoff => format!("Required {minutes} minutes for dropoff operations"),
            EntryKind::FuelStop { .. } => format!("Fuel stop for {minutes} minutes"),
            EntryKind::Break => {
                format!("{minutes}-minute break required after 8 cumulative hours of driving")
            }
            EntryKind::DailyRest => {
                format!("{}-hour rest required to reset 14-hour window", minutes / 60)
            }
            EntryKind::Restart => {
                format!("{}-hour restart required after 70 hours in 8-day cycle", minutes / 60)
            }
        }
    }
}

// ── DutyEntry ─────────────────────────────────────────────────────────────────

/// One contiguous stretch of a single duty status.
///
/// Built once by [`DutyEntry::new`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyEntry {
    /// Calendar days since the trip's start date.
    pub day_index:   i64,
    pub start:       NaiveDateTime,
    pub end:         NaiveDateTime,
    pub duty_status: DutyStatus,
    pub note:        String,
    pub rule:        HosRule,
    pub explanation: String,
    pub kind:        EntryKind,
}

impl DutyEntry {
    /// Build an entry of `kind` lasting `minutes` from `start`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `minutes <= 0`, and if the end falls outside
    /// the calendar.  See [`try_new`][Self::try_new].
    pub fn new(kind: EntryKind, trip_start: NaiveDateTime, start: NaiveDateTime, minutes: i64) -> Self {
        let end = start + chrono::Duration::minutes(minutes);
        Self::spanning(kind, trip_start, start, end, minutes)
    }

    /// Like [`new`][Self::new], but `None` when the end is not representable.
    pub fn try_new(
        kind:       EntryKind,
        trip_start: NaiveDateTime,
        start:      NaiveDateTime,
        minutes:    i64,
    ) -> Option<Self> {
        let end = start.checked_add_signed(chrono::Duration::try_minutes(minutes)?)?;
        Some(Self::spanning(kind, trip_start, start, end, minutes))
    }

    fn spanning(
        kind:       EntryKind,
        trip_start: NaiveDateTime,
        start:      NaiveDateTime,
        end:        NaiveDateTime,
        minutes:    i64,
    ) -> Self {
        debug_assert!(minutes > 0, "duty entries must have positive duration");
        Self {
            day_index:   day_index(trip_start, start),
            start,
            end,
            duty_status: kind.status(),
            note:        kind.note(),
            rule:        kind.rule(),
            explanation: kind.explanation(minutes),
            kind,
        }
    }

    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    #[inline]
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3_600.0
    }

    /// The rule citation, e.g. `"FMCSA 395.3(a)(3)(ii)"`.
    #[inline]
    pub fn rule_applied(&self) -> &'static str {
        self.rule.citation()
    }

    /// `true` if `at` falls in `[start, end)`.
    #[inline]
    pub fn covers(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }
}
