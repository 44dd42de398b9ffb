//! Integration tests for hos-engine.

use chrono::{Duration, NaiveDateTime};
use tracing_subscriber::{EnvFilter, fmt};

use hos_core::{DutyEntry, DutyStatus, EntryKind, HosLimits, Leg};

use crate::{TripLog, TripPlanner};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn start() -> NaiveDateTime {
    at("2025-01-06 08:00")
}

fn plan(legs: Vec<Leg>, cycle_hours: f64) -> TripLog {
    init_tracing();
    let log = TripPlanner::new(legs, start())
        .cycle_hours_used(cycle_hours)
        .plan()
        .unwrap();
    assert_invariants(&log, cycle_hours);
    log
}

/// `(status, start, end)` triples for compact assertions.
fn timeline(log: &TripLog) -> Vec<(DutyStatus, NaiveDateTime, NaiveDateTime)> {
    log.entries.iter().map(|e| (e.duty_status, e.start, e.end)).collect()
}

fn count(log: &TripLog, pred: impl Fn(&EntryKind) -> bool) -> usize {
    log.entries.iter().filter(|e| pred(&e.kind)).count()
}

fn is_window_reset(e: &DutyEntry) -> bool {
    matches!(e.kind, EntryKind::DailyRest | EntryKind::Restart)
}

/// Check every scheduling invariant against default limits.
fn assert_invariants(log: &TripLog, cycle_hours: f64) {
    let limits = HosLimits::default();
    let entries = &log.entries;

    // Coverage: contiguous from the start time, positive durations.
    if let Some(first) = entries.first() {
        assert_eq!(first.start, log.start_time, "first entry starts at the trip start");
    }
    for e in entries {
        assert!(e.end > e.start, "empty entry {e:?}");
    }
    for pair in entries.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap after {:?}", pair[0]);
    }

    // Driving cap: driving inside the trailing window since the last
    // rest/restart, measured at each driving entry's start.
    let span = Duration::minutes(limits.window_span_minutes);
    let mut since_reset = 0;
    for (j, e) in entries.iter().enumerate() {
        if is_window_reset(e) {
            since_reset = j + 1;
        }
        if e.duty_status != DutyStatus::Driving {
            continue;
        }
        let floor = e.start - span;
        let driven: i64 = entries[since_reset..=j]
            .iter()
            .filter(|k| k.duty_status == DutyStatus::Driving && k.start >= floor)
            .map(DutyEntry::duration_minutes)
            .sum();
        assert!(driven <= limits.max_driving_minutes, "{driven} min in window at {}", e.start);
    }

    // Break trigger.
    let mut since_break = 0;
    for (j, e) in entries.iter().enumerate() {
        match e.duty_status {
            DutyStatus::Driving => since_break += e.duration_minutes(),
            DutyStatus::OffDuty if e.duration_minutes() >= limits.break_minutes => since_break = 0,
            _ => {}
        }
        assert!(since_break <= limits.break_after_driving_minutes, "no break by {}", e.end);
        if since_break >= limits.break_after_driving_minutes {
            if let Some(next) = entries.get(j + 1) {
                assert_eq!(next.duty_status, DutyStatus::OffDuty, "break due at {}", e.end);
                assert!(next.duration_minutes() >= limits.break_minutes);
            }
        }
    }

    // Restart trigger: the cycle is zeroed exactly at restarts.
    let mut cycle = hos_core::hours_to_minutes(cycle_hours);
    for (j, e) in entries.iter().enumerate() {
        if e.kind == EntryKind::Restart {
            assert!(cycle >= limits.cycle_limit_minutes, "restart at {} with cycle {cycle}", e.start);
            assert_eq!(e.duration_minutes(), limits.restart_minutes);
            cycle = 0;
            continue;
        }
        if e.duty_status.is_on_duty() {
            cycle += e.duration_minutes();
        }
        if e.duty_status == DutyStatus::Driving {
            assert!(cycle <= limits.cycle_limit_minutes, "drove past the cycle at {}", e.end);
        }
        if cycle >= limits.cycle_limit_minutes {
            if let Some(next) = entries.get(j + 1) {
                assert_eq!(next.kind, EntryKind::Restart, "restart due at {}", e.end);
            }
        }
    }
    if entries.is_empty() {
        assert_eq!(log.final_cycle_hours, cycle_hours, "untouched cycle is reported as given");
    } else {
        assert!((log.final_cycle_hours - cycle as f64 / 60.0).abs() < 1e-9);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn pickup_then_dropoff() {
        let log = plan(vec![Leg::new(0, 5.0, 15).pickup(), Leg::new(1, 5.0, 15).dropoff()], 0.0);
        assert_eq!(
            timeline(&log),
            vec![
                (DutyStatus::OnDutyNotDriving, at("2025-01-06 08:00"), at("2025-01-06 09:00")),
                (DutyStatus::Driving,          at("2025-01-06 09:00"), at("2025-01-06 09:15")),
                (DutyStatus::OnDutyNotDriving, at("2025-01-06 09:15"), at("2025-01-06 10:15")),
                (DutyStatus::Driving,          at("2025-01-06 10:15"), at("2025-01-06 10:30")),
            ]
        );
        assert_eq!(log.entries[0].kind, EntryKind::Pickup);
        assert_eq!(log.entries[2].kind, EntryKind::Dropoff);
        assert_eq!(log.entries[0].rule_applied(), "FMCSA 395.3(a)(2)");
        assert_eq!(log.entries[1].note, "Driving leg 1");
        assert_eq!(log.entries[3].note, "Driving leg 2");
        assert_eq!(log.minutes_in(DutyStatus::Driving), 30);
        assert_eq!(log.final_cycle_hours, 2.5);
        assert_eq!(log.days.len(), 1);
    }

    #[test]
    fn eight_hours_driving_forces_break() {
        let log = plan(vec![Leg::new(0, 500.0, 600)], 0.0);
        assert_eq!(
            timeline(&log),
            vec![
                (DutyStatus::Driving, at("2025-01-06 08:00"), at("2025-01-06 16:00")),
                (DutyStatus::OffDuty, at("2025-01-06 16:00"), at("2025-01-06 16:30")),
                (DutyStatus::Driving, at("2025-01-06 16:30"), at("2025-01-06 18:30")),
            ]
        );
        let brk = &log.entries[1];
        assert_eq!(brk.kind, EntryKind::Break);
        assert_eq!(brk.rule_applied(), "FMCSA 395.3(a)(3)(ii)");
        assert_eq!(brk.note, "Required 30-minute break after 8 hours driving");
    }

    #[test]
    fn cycle_limit_forces_restart() {
        let log = plan(vec![Leg::new(0, 100.0, 120)], 69.0);
        assert_eq!(
            timeline(&log),
            vec![
                (DutyStatus::Driving, at("2025-01-06 08:00"), at("2025-01-06 09:00")),
                (DutyStatus::OffDuty, at("2025-01-06 09:00"), at("2025-01-07 19:00")),
                (DutyStatus::Driving, at("2025-01-07 19:00"), at("2025-01-07 20:00")),
            ]
        );
        assert_eq!(count(&log, |k| *k == EntryKind::Restart), 1);
        assert_eq!(log.entries[1].rule_applied(), "FMCSA 395.3(a)(3)(i)");
        assert_eq!(log.entries[2].day_index, 1);
        assert_eq!(log.final_cycle_hours, 1.0);
    }

    #[test]
    fn restart_preempts_driving_after_pickup() {
        let log = plan(vec![Leg::new(0, 100.0, 120).pickup()], 69.0);
        let kinds: Vec<&EntryKind> = log.entries.iter().map(|e| &e.kind).collect();
        assert_eq!(
            kinds,
            vec![&EntryKind::Pickup, &EntryKind::Restart, &EntryKind::Driving { leg_index: 0 }]
        );
        assert_eq!(log.entries[2].duration_minutes(), 120);
        assert_eq!(log.final_cycle_hours, 2.0);
    }

    #[test]
    fn cycle_already_spent_restarts_first() {
        let log = plan(vec![Leg::new(0, 50.0, 60)], 75.0);
        assert_eq!(log.entries[0].kind, EntryKind::Restart);
        assert_eq!(log.entries[1].start, at("2025-01-07 18:00"));
        assert_eq!(log.final_cycle_hours, 1.0);
    }

    #[test]
    fn eleven_hours_driving_forces_rest() {
        let log = plan(vec![Leg::new(0, 700.0, 900)], 0.0);
        assert_eq!(
            timeline(&log),
            vec![
                (DutyStatus::Driving, at("2025-01-06 08:00"), at("2025-01-06 16:00")),
                (DutyStatus::OffDuty, at("2025-01-06 16:00"), at("2025-01-06 16:30")),
                (DutyStatus::Driving, at("2025-01-06 16:30"), at("2025-01-06 19:30")),
                (DutyStatus::OffDuty, at("2025-01-06 19:30"), at("2025-01-07 05:30")),
                (DutyStatus::Driving, at("2025-01-07 05:30"), at("2025-01-07 09:30")),
            ]
        );
        assert_eq!(log.entries[3].kind, EntryKind::DailyRest);
        assert_eq!(log.entries[3].explanation, "10-hour rest required to reset 14-hour window");
    }

    #[test]
    fn fourteen_hour_window_forces_rest() {
        // Seven 60-minute service stops with an hour of driving each fill the
        // window with 840 on-duty minutes but only 420 driving.
        let legs: Vec<Leg> = (0..8)
            .map(|i| {
                let leg = Leg::new(i, 50.0, 60);
                if i % 2 == 0 { leg.pickup() } else { leg.dropoff() }
            })
            .collect();
        let log = plan(legs, 0.0);

        let rest = log.entries.iter().position(|e| e.kind == EntryKind::DailyRest).unwrap();
        assert_eq!(log.entries[rest].start, at("2025-01-06 23:00"));
        assert_eq!(log.entries[rest - 1].kind, EntryKind::Dropoff);
        assert_eq!(log.entries[rest + 1].start, at("2025-01-07 09:00"));
        assert_eq!(log.entries.len(), 17);
        assert_eq!(count(&log, |k| *k == EntryKind::Break), 0);
    }

    #[test]
    fn long_leg_takes_fuel_stops() {
        let log = plan(vec![Leg::new(0, 50.0, 60).pickup(), Leg::new(1, 2500.0, 2700).dropoff()], 0.0);

        let fuel: Vec<&DutyEntry> = log
            .entries
            .iter()
            .filter(|e| matches!(e.kind, EntryKind::FuelStop { .. }))
            .collect();
        assert_eq!(fuel.len(), 2);
        assert_eq!(fuel[0].note, "Fuel stop at 1000 miles");
        assert_eq!(fuel[1].note, "Fuel stop at 2000 miles");
        assert!(fuel.iter().all(|e| e.duration_minutes() == 20));
        assert!(fuel.iter().all(|e| e.duty_status == DutyStatus::OnDutyNotDriving));

        assert_eq!(log.minutes_in(DutyStatus::Driving), 2760);
        assert!(count(&log, |k| *k == EntryKind::DailyRest) >= 3);
        assert!(log.days.len() >= 4);
    }

    #[test]
    fn single_long_leg_timeline() {
        let log = plan(vec![Leg::new(0, 2500.0, 2700)], 0.0);
        let fuel_starts: Vec<NaiveDateTime> = log
            .entries
            .iter()
            .filter(|e| matches!(e.kind, EntryKind::FuelStop { .. }))
            .map(|e| e.start)
            .collect();
        // Each stop waits for the end of the driving stretch in which its
        // trigger passes, and for the break that stretch made due.
        assert_eq!(fuel_starts, vec![at("2025-01-07 14:00"), at("2025-01-08 11:50")]);
        assert_eq!(log.end_time(), at("2025-01-09 23:40"));
        assert_eq!(count(&log, |k| *k == EntryKind::DailyRest), 4);
    }

    #[test]
    fn fuel_trigger_counts_from_leg_start() {
        // 1000 of 1500 miles falls 400 minutes after the leg opens at 08:00,
        // before its unloading stop.  Driving halts at 15:00 on the cycle,
        // after that trigger, so the stop follows the restart directly.
        let log = plan(vec![Leg::new(0, 1500.0, 600).dropoff()], 63.0);
        assert_eq!(
            timeline(&log),
            vec![
                (DutyStatus::OnDutyNotDriving, at("2025-01-06 08:00"), at("2025-01-06 09:00")),
                (DutyStatus::Driving, at("2025-01-06 09:00"), at("2025-01-06 15:00")),
                (DutyStatus::OffDuty, at("2025-01-06 15:00"), at("2025-01-08 01:00")),
                (DutyStatus::OnDutyNotDriving, at("2025-01-08 01:00"), at("2025-01-08 01:20")),
                (DutyStatus::Driving, at("2025-01-08 01:20"), at("2025-01-08 05:20")),
            ]
        );
        assert_eq!(log.entries[2].kind, EntryKind::Restart);
        assert_eq!(log.entries[3].kind, EntryKind::FuelStop { at_mile: 1000.0 });
    }

    #[test]
    fn cycle_just_under_limit_drives_first() {
        let log = plan(vec![Leg::new(0, 50.0, 60)], 69.995);
        assert_eq!(log.entries[0].kind, EntryKind::Driving { leg_index: 0 });
        assert_eq!(log.entries[0].duration_minutes(), 1);
        assert_eq!(log.entries[1].kind, EntryKind::Restart);
        assert_eq!(log.minutes_in(DutyStatus::Driving), 60);
    }

    #[test]
    fn thousand_mile_leg_has_no_fuel_stop() {
        let log = plan(vec![Leg::new(0, 1000.0, 1000)], 0.0);
        assert_eq!(count(&log, |k| matches!(k, EntryKind::FuelStop { .. })), 0);
    }

    #[test]
    fn multi_day_trip_restarts_mid_route() {
        let legs = vec![
            Leg::new(0, 300.0, 330).pickup(),
            Leg::new(1, 2600.0, 2900).dropoff(),
            Leg::new(2, 900.0, 1000),
        ];
        let log = plan(legs, 55.0);
        assert_eq!(count(&log, |k| *k == EntryKind::Restart), 1);
        assert_eq!(log.minutes_in(DutyStatus::Driving), 4230);
    }

    #[test]
    fn empty_route_emits_nothing() {
        let log = plan(vec![], 12.5);
        assert!(log.is_empty());
        assert!(log.days.is_empty());
        assert_eq!(log.end_time(), start());
        assert_eq!(log.final_cycle_hours, 12.5);

        let log = plan(vec![], 69.999);
        assert_eq!(log.final_cycle_hours, 69.999);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use super::*;

    /// A spread of trips that exercise every reset path.
    fn trips() -> Vec<(Vec<Leg>, f64)> {
        vec![
            (vec![Leg::new(0, 5.0, 15).pickup(), Leg::new(1, 5.0, 15).dropoff()], 0.0),
            (vec![Leg::new(0, 500.0, 600)], 0.0),
            (vec![Leg::new(0, 100.0, 120)], 69.0),
            (vec![Leg::new(0, 120.0, 130).pickup(), Leg::new(1, 3100.0, 3400).dropoff()], 30.0),
            (vec![Leg::new(0, 40.0, 45).pickup(), Leg::new(1, 1500.0, 1700).dropoff()], 68.5),
            (
                (0..12).map(|i| Leg::new(i, 320.0, 365 + i as i64 * 7)).collect(),
                10.25,
            ),
            (vec![Leg::new(0, 4200.0, 4700)], 0.0),
        ]
    }

    #[test]
    fn invariants_hold_for_all_trips() {
        for (legs, cycle) in trips() {
            let log = plan(legs.clone(), cycle);
            let expected: i64 = legs.iter().map(|l| l.duration_minutes).sum();
            assert_eq!(log.minutes_in(DutyStatus::Driving), expected, "all driving scheduled");
        }
    }

    #[test]
    fn planning_is_idempotent() {
        for (legs, cycle) in trips() {
            let planner = TripPlanner::new(legs, start()).cycle_hours_used(cycle);
            assert_eq!(planner.plan().unwrap(), planner.plan().unwrap());
        }
    }

    #[test]
    fn day_sheets_cover_every_start_date() {
        for (legs, cycle) in trips() {
            let log = plan(legs, cycle);
            let attributed: usize = log.days.iter().map(|d| d.entries.len()).sum();
            assert_eq!(attributed, log.entries.len());
            for day in &log.days {
                assert!(day.entries.iter().all(|e| e.start.date() == day.date));
                assert!(day.entries.iter().all(|e| e.day_index == day.day_index));
            }
        }
    }
}

// ── Day sheets ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod day_tests {
    use super::*;

    #[test]
    fn restart_trip_sheets() {
        let log = plan(vec![Leg::new(0, 100.0, 120)], 69.0);
        assert_eq!(log.days.len(), 2);

        let day0 = &log.days[0];
        assert_eq!(day0.totals.driving_hours, 1.0);
        assert_eq!(day0.totals.on_duty_hours, 1.0);
        assert_eq!(day0.totals.off_duty_hours, 34.0);
        assert_eq!(day0.grid.slot(32), DutyStatus::Driving);
        assert_eq!(day0.grid.slot(36), DutyStatus::OffDuty);

        let day1 = &log.days[1];
        assert_eq!(day1.day_index, 1);
        assert!((0..76).all(|i| day1.grid.slot(i) == DutyStatus::OffDuty));
        assert!((76..80).all(|i| day1.grid.slot(i) == DutyStatus::Driving));
        assert!((80..96).all(|i| day1.grid.slot(i) == DutyStatus::OffDuty));
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation_tests {
    use hos_core::HosError;

    use super::*;
    use crate::{EngineError, EngineObserver, generate_logs};

    #[derive(Default)]
    struct Counting {
        entries: usize,
        ended:   bool,
    }

    impl EngineObserver for Counting {
        fn on_entry(&mut self, _entry: &DutyEntry) {
            self.entries += 1;
        }
        fn on_trip_end(&mut self, _log: &TripLog) {
            self.ended = true;
        }
    }

    fn input_error(result: crate::EngineResult<TripLog>) -> HosError {
        match result {
            Err(EngineError::Input(e)) => e,
            other => panic!("expected input error, got {other:?}"),
        }
    }

    #[test]
    fn negative_cycle_hours_rejected() {
        let err = input_error(TripPlanner::new(vec![], start()).cycle_hours_used(-1.0).plan());
        assert_eq!(err, HosError::InvalidCycleHours(-1.0));
    }

    #[test]
    fn non_finite_cycle_hours_rejected() {
        let err = input_error(TripPlanner::new(vec![], start()).cycle_hours_used(f64::NAN).plan());
        assert!(matches!(err, HosError::InvalidCycleHours(_)));

        let err = input_error(TripPlanner::new(vec![], start()).cycle_hours_used(1e300).plan());
        assert_eq!(err, HosError::InvalidCycleHours(1e300));
    }

    #[test]
    fn oversized_leg_rejected_before_any_entry() {
        let mut observer = Counting::default();
        let legs = vec![Leg::new(0, 2000.0, 1_000_000_000_000)];
        let planner = TripPlanner::new(legs, start());
        assert!(matches!(planner.validate(), Err(EngineError::Input(HosError::InvalidLeg { .. }))));
        assert!(planner.run(&mut observer).is_err());
        assert_eq!(observer.entries, 0);
        assert!(!observer.ended);
    }

    #[test]
    fn oversized_limit_rejected_before_any_entry() {
        let mut observer = Counting::default();
        let limits = HosLimits { restart_minutes: i64::MAX, ..HosLimits::default() };
        let result = TripPlanner::new(vec![Leg::new(0, 50.0, 60)], start())
            .cycle_hours_used(70.0)
            .limits(limits)
            .run(&mut observer);
        assert!(matches!(input_error(result), HosError::Config(_)));
        assert_eq!(observer.entries, 0);
    }

    #[test]
    fn calendar_end_is_an_error_not_a_panic() {
        let late = NaiveDateTime::MAX - Duration::minutes(30);
        let result = TripPlanner::new(vec![Leg::new(0, 50.0, 60)], late).plan();
        assert!(matches!(result, Err(EngineError::ClockOverflow { at }) if at == late));
    }

    #[test]
    fn invalid_leg_rejected_before_any_entry() {
        let legs = vec![Leg::new(0, 100.0, 120), Leg::new(1, 100.0, 0)];
        let mut observer = Counting::default();
        let err = input_error(TripPlanner::new(legs, start()).run(&mut observer));
        assert!(matches!(err, HosError::InvalidLeg { index: 1, .. }));
        assert_eq!(observer.entries, 0);
        assert!(!observer.ended);
    }

    #[test]
    fn pickup_and_dropoff_on_one_leg_rejected() {
        let legs = vec![Leg::new(0, 10.0, 20).pickup().dropoff()];
        let err = input_error(TripPlanner::new(legs, start()).plan());
        assert!(err.to_string().contains("both pickup and dropoff"));
    }

    #[test]
    fn bad_start_time_rejected() {
        let err = input_error(generate_logs(&[Leg::new(0, 10.0, 20)], "next tuesday", 0.0));
        assert!(matches!(err, HosError::InvalidStartTime { .. }));
    }

    #[test]
    fn invalid_limits_rejected() {
        let limits = HosLimits { max_driving_minutes: 0, ..HosLimits::default() };
        let err = input_error(TripPlanner::new(vec![], start()).limits(limits).plan());
        assert!(matches!(err, HosError::Config(_)));
        assert!(!err.is_input_validation());
    }

    #[test]
    fn generate_logs_matches_planner() {
        let legs = vec![Leg::new(0, 500.0, 600)];
        let log = generate_logs(&legs, "2025-01-06T08:00:00Z", 0.0).unwrap();
        assert_eq!(log, TripPlanner::new(legs, start()).plan().unwrap());
    }
}

// ── Observer, inert inputs, batch ─────────────────────────────────────────────

#[cfg(test)]
mod planner_tests {
    use super::*;
    use crate::{DriverMode, EngineObserver, plan_many};

    #[derive(Default)]
    struct Recorder {
        legs:    Vec<(usize, NaiveDateTime)>,
        entries: Vec<DutyEntry>,
        days:    Option<usize>,
    }

    impl EngineObserver for Recorder {
        fn on_leg_start(&mut self, leg: &Leg, at: NaiveDateTime) {
            self.legs.push((leg.index, at));
        }
        fn on_entry(&mut self, entry: &DutyEntry) {
            self.entries.push(entry.clone());
        }
        fn on_trip_end(&mut self, log: &TripLog) {
            self.days = Some(log.days.len());
        }
    }

    #[test]
    fn observer_sees_every_entry_in_order() {
        let legs = vec![Leg::new(0, 5.0, 15).pickup(), Leg::new(1, 500.0, 600).dropoff()];
        let mut rec = Recorder::default();
        let log = TripPlanner::new(legs, start()).run(&mut rec).unwrap();

        assert_eq!(rec.entries, log.entries);
        assert_eq!(rec.legs, vec![(0, at("2025-01-06 08:00")), (1, at("2025-01-06 09:15"))]);
        assert_eq!(rec.days, Some(log.days.len()));
    }

    #[test]
    fn history_and_mode_are_inert() {
        init_tracing();
        let legs = vec![Leg::new(0, 700.0, 900)];
        let history = vec![DutyEntry::new(
            EntryKind::Driving { leg_index: 0 },
            at("2025-01-05 08:00"),
            at("2025-01-05 08:00"),
            600,
        )];
        let plain = TripPlanner::new(legs.clone(), start()).plan().unwrap();
        let with_inputs = TripPlanner::new(legs, start())
            .driver_history(history)
            .mode(DriverMode::TeamDriver)
            .plan()
            .unwrap();
        assert_eq!(plain, with_inputs);
    }

    #[test]
    fn custom_limits_apply() {
        let limits = HosLimits { break_after_driving_minutes: 240, ..HosLimits::default() };
        let log = TripPlanner::new(vec![Leg::new(0, 300.0, 300)], start())
            .limits(limits)
            .plan()
            .unwrap();
        assert_eq!(log.entries[0].duration_minutes(), 240);
        assert_eq!(log.entries[1].kind, EntryKind::Break);
    }

    #[test]
    fn batch_keeps_order_and_errors() {
        let planners = vec![
            TripPlanner::new(vec![Leg::new(0, 500.0, 600)], start()),
            TripPlanner::new(vec![Leg::new(0, -5.0, 10)], start()),
            TripPlanner::new(vec![Leg::new(0, 100.0, 120)], start()).cycle_hours_used(69.0),
        ];
        let results = plan_many(&planners);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().entries.len(), 3);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().final_cycle_hours, 1.0);
    }
}

// ── Building blocks ───────────────────────────────────────────────────────────

#[cfg(test)]
mod window_tests {
    use super::*;
    use crate::{WindowTotals, WindowTracker};

    #[test]
    fn sums_recorded_events() {
        let mut w = WindowTracker::new(840);
        w.record(at("2025-01-06 08:00"), 60, true);
        w.record(at("2025-01-06 09:00"), 20, false);
        assert_eq!(
            w.totals_at(at("2025-01-06 09:20")),
            WindowTotals { driving_minutes: 60, on_duty_minutes: 80 }
        );
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn events_expire_by_start() {
        let mut w = WindowTracker::new(840);
        w.record(at("2025-01-06 08:00"), 60, true);
        w.record(at("2025-01-06 09:00"), 60, false);

        // 22:00 − 14 h = 08:00: the first event is still inside.
        assert_eq!(w.totals_at(at("2025-01-06 22:00")).on_duty_minutes, 120);
        let t = w.totals_at(at("2025-01-06 22:01"));
        assert_eq!(t, WindowTotals { driving_minutes: 0, on_duty_minutes: 60 });
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn queries_never_move_backwards() {
        let mut w = WindowTracker::new(840);
        w.record(at("2025-01-06 08:00"), 60, true);
        assert_eq!(w.totals_at(at("2025-01-06 23:00")).driving_minutes, 0);
        assert_eq!(w.totals_at(at("2025-01-06 10:00")).driving_minutes, 0);
    }

    #[test]
    fn reset_opens_fresh_window() {
        let mut w = WindowTracker::new(840);
        w.record(at("2025-01-06 08:00"), 660, true);
        assert!(w.is_exhausted(660, 840));
        w.reset();
        assert!(w.is_empty());
        assert_eq!(w.totals(), WindowTotals::default());

        w.record(at("2025-01-07 05:00"), 30, false);
        assert_eq!(w.totals_at(at("2025-01-07 05:30")).on_duty_minutes, 30);
        assert!(!w.is_exhausted(660, 840));
    }
}

#[cfg(test)]
mod fuel_tests {
    use super::*;
    use crate::{FuelPlan, LegProcessor};

    #[test]
    fn triggers_scale_with_leg_progress() {
        let plan = FuelPlan::schedule(start(), 2500.0, 2700, 1000.0);
        let triggers: Vec<NaiveDateTime> = plan.stops().iter().map(|s| s.trigger).collect();
        assert_eq!(triggers, vec![at("2025-01-07 02:00"), at("2025-01-07 20:00")]);
        assert_eq!(plan.stops()[1].at_mile, 2000.0);
    }

    #[test]
    fn trigger_past_calendar_end_is_never_due() {
        let late = NaiveDateTime::MAX - Duration::minutes(10);
        let mut plan = FuelPlan::schedule(late, 2000.0, 600, 1000.0);
        assert_eq!(plan.stops()[0].trigger, NaiveDateTime::MAX);
        assert!(plan.next_due(late).is_none());
    }

    #[test]
    fn interval_must_be_exceeded() {
        assert_eq!(FuelPlan::schedule(start(), 1000.0, 1100, 1000.0).pending(), 0);
        assert_eq!(FuelPlan::schedule(start(), 1000.5, 1100, 1000.0).pending(), 1);
    }

    #[test]
    fn next_due_pops_in_order() {
        let mut plan = FuelPlan::schedule(start(), 2500.0, 2700, 1000.0);
        assert!(plan.next_due(at("2025-01-07 01:59")).is_none());

        let first = plan.next_due(at("2025-01-07 02:00")).unwrap();
        assert_eq!(first.at_mile, 1000.0);
        assert_eq!(plan.pending(), 1);
        assert!(plan.next_due(at("2025-01-07 02:00")).is_none());

        assert!(plan.next_due(at("2025-01-09 00:00")).is_some());
        assert!(plan.next_due(at("2025-01-09 00:00")).is_none());
    }

    #[test]
    fn service_stops_follow_flags() {
        let p = LegProcessor::new(&HosLimits::default());
        assert_eq!(p.service_stop(&Leg::new(0, 1.0, 1).pickup()), Some((EntryKind::Pickup, 60)));
        assert_eq!(p.service_stop(&Leg::new(0, 1.0, 1).dropoff()), Some((EntryKind::Dropoff, 60)));
        assert_eq!(p.service_stop(&Leg::new(0, 1.0, 1)), None);
    }
}
