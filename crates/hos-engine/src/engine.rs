//! The `RuleEngine` and its per-leg simulation loop.

use chrono::NaiveDateTime;
use tracing::debug;

use hos_core::{DutyEntry, DutyStatus, EntryKind, HosLimits, Leg};

use crate::{EngineError, EngineObserver, EngineResult, LegProcessor, SimulationState};

/// Emits the duty entries of a trip, one leg at a time.
///
/// Each loop iteration of [`run_leg`][Self::run_leg] runs these steps in order:
///
/// ```text
/// ① settle   break if 8 h driven since the last one, then restart if the
///             cycle is spent (a due restart replaces the break)
/// ② drive    min(remaining, 11 h − window driving, 14 h − window on-duty,
///                8 h − driving since break, 70 h − cycle)
/// ③ fuel     every stop whose trigger has passed, each preceded by ①
/// ④ rest     10 h off if driving remains, the window is spent, and the
///             cycle is not
/// ```
///
/// Loading and unloading stops run before the leg's loop, also preceded by
/// ①, so every limit reached is answered by the very next entry.  Fuel
/// triggers are measured from the leg's start, before its loading stop, and
/// are only checked once the leg has driven.
pub struct RuleEngine<'o, O: EngineObserver> {
    limits:     HosLimits,
    legs:       LegProcessor,
    trip_start: NaiveDateTime,
    state:      SimulationState,
    entries:    Vec<DutyEntry>,
    observer:   &'o mut O,
}

impl<'o, O: EngineObserver> RuleEngine<'o, O> {
    /// `limits` must already be validated.
    pub fn new(
        limits:        HosLimits,
        trip_start:    NaiveDateTime,
        cycle_minutes: i64,
        observer:      &'o mut O,
    ) -> Self {
        Self {
            legs:    LegProcessor::new(&limits),
            state:   SimulationState::new(trip_start, cycle_minutes, limits.window_span_minutes),
            entries: Vec::new(),
            limits,
            trip_start,
            observer,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn entries(&self) -> &[DutyEntry] {
        &self.entries
    }

    /// Consume the engine, returning the entries and the final counters.
    pub fn finish(self) -> (Vec<DutyEntry>, SimulationState) {
        (self.entries, self.state)
    }

    /// Schedule all work of one leg.
    pub fn run_leg(&mut self, leg: &Leg) -> EngineResult<()> {
        let leg_start = self.state.clock;
        self.observer.on_leg_start(leg, leg_start);
        let mut fuel = self.legs.fuel_plan(leg, leg_start);

        if let Some((kind, minutes)) = self.legs.service_stop(leg) {
            self.settle()?;
            self.emit(kind, minutes)?;
        }

        let mut remaining = leg.duration_minutes;
        let mut driven = false;

        while remaining > 0 {
            let mut progressed = self.settle()?;

            let drive = self.admissible(remaining);
            if drive > 0 {
                self.emit(EntryKind::Driving { leg_index: leg.index }, drive)?;
                remaining -= drive;
                driven = true;
                progressed = true;
            }

            if driven {
                let minutes = self.limits.fuel_stop_minutes;
                while let Some(stop) = fuel.next_due(self.state.clock) {
                    self.settle()?;
                    self.emit(EntryKind::FuelStop { at_mile: stop.at_mile }, minutes)?;
                    progressed = true;
                }
            }

            if remaining > 0 && self.window_exhausted() && !self.cycle_exhausted() {
                self.take_rest()?;
                progressed = true;
            }

            if !progressed {
                return Err(EngineError::Stalled { leg_index: leg.index, at: self.state.clock });
            }
        }
        Ok(())
    }

    // ── Limit checks ──────────────────────────────────────────────────────

    /// Driving minutes allowed right now, capped at `remaining`.
    fn admissible(&mut self, remaining: i64) -> i64 {
        let window = self.state.window.totals_at(self.state.clock);
        let l = &self.limits;
        remaining
            .min(l.max_driving_minutes - window.driving_minutes)
            .min(l.max_on_duty_minutes - window.on_duty_minutes)
            .min(l.break_after_driving_minutes - self.state.driving_since_break)
            .min(l.cycle_limit_minutes - self.state.cycle_minutes)
            .max(0)
    }

    fn window_exhausted(&mut self) -> bool {
        self.state.window.advance_to(self.state.clock);
        self.state
            .window
            .is_exhausted(self.limits.max_driving_minutes, self.limits.max_on_duty_minutes)
    }

    #[inline]
    fn cycle_exhausted(&self) -> bool {
        self.state.cycle_minutes >= self.limits.cycle_limit_minutes
    }

    #[inline]
    fn break_due(&self) -> bool {
        self.state.driving_since_break >= self.limits.break_after_driving_minutes
    }

    // ── Resets ────────────────────────────────────────────────────────────

    /// Take whatever break or restart is due.  Returns `true` if one was.
    fn settle(&mut self) -> EngineResult<bool> {
        if self.cycle_exhausted() {
            self.take_restart()?;
            return Ok(true);
        }
        if self.break_due() {
            self.take_break()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn take_break(&mut self) -> EngineResult<()> {
        debug!(at = %self.state.clock, driven = self.state.driving_since_break, "30-minute break");
        self.emit(EntryKind::Break, self.limits.break_minutes)?;
        self.state.driving_since_break = 0;
        Ok(())
    }

    fn take_rest(&mut self) -> EngineResult<()> {
        let window = self.state.window.totals();
        debug!(
            at = %self.state.clock,
            driving = window.driving_minutes,
            on_duty = window.on_duty_minutes,
            "window spent, daily rest"
        );
        self.emit(EntryKind::DailyRest, self.limits.daily_rest_minutes)?;
        self.state.driving_since_break = 0;
        self.state.window.reset();
        Ok(())
    }

    fn take_restart(&mut self) -> EngineResult<()> {
        debug!(at = %self.state.clock, cycle = self.state.cycle_minutes, "cycle spent, restart");
        self.emit(EntryKind::Restart, self.limits.restart_minutes)?;
        self.state.cycle_minutes = 0;
        self.state.driving_since_break = 0;
        self.state.window.reset();
        Ok(())
    }

    // ── Emission ──────────────────────────────────────────────────────────

    /// Append an entry at the clock and charge it to the counters.
    fn emit(&mut self, kind: EntryKind, minutes: i64) -> EngineResult<()> {
        let start = self.state.clock;
        let entry = DutyEntry::try_new(kind, self.trip_start, start, minutes)
            .ok_or(EngineError::ClockOverflow { at: start })?;

        if entry.duty_status.is_on_duty() {
            let driving = entry.duty_status == DutyStatus::Driving;
            self.state.window.record(start, minutes, driving);
            self.state.cycle_minutes += minutes;
            if driving {
                self.state.driving_since_break += minutes;
            }
        }
        self.state.clock = entry.end;

        debug!(
            status = %entry.duty_status,
            start = %entry.start,
            minutes,
            note = %entry.note,
            "entry"
        );
        self.observer.on_entry(&entry);
        self.entries.push(entry);
        Ok(())
    }
}
