//! Fluent builder and entry points for planning a trip.

use chrono::NaiveDateTime;
use tracing::{info, instrument, warn};

use hos_core::{
    DutyEntry, HosError, HosLimits, Leg, MAX_DURATION_MINUTES, hours_to_minutes, minutes_to_hours,
    parse_start_time, validate_legs,
};
use hos_logsheet::DayAggregator;

use crate::{EngineObserver, EngineResult, NoopObserver, RuleEngine, TripLog};

/// How many drivers share the truck.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriverMode {
    #[default]
    SingleDriver,
    /// Accepted but scheduled exactly like a single driver.
    TeamDriver,
}

/// Fluent builder for planning one trip.
///
/// # Required inputs
///
/// - the routed legs, in travel order
/// - the start time
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                       |
/// |--------------------------|-------------------------------|
/// | `.cycle_hours_used(h)`   | `0.0`                         |
/// | `.limits(l)`             | `HosLimits::default()` (FMCSA) |
/// | `.driver_history(v)`     | empty (stored, not consulted) |
/// | `.mode(m)`               | `SingleDriver` (stored, not consulted) |
///
/// # Example
///
/// ```rust,ignore
/// let log = TripPlanner::new(legs, start)
///     .cycle_hours_used(12.5)
///     .run(&mut NoopObserver)?;
/// ```
#[derive(Clone, Debug)]
pub struct TripPlanner {
    legs:             Vec<Leg>,
    start_time:       NaiveDateTime,
    cycle_hours_used: f64,
    limits:           HosLimits,
    driver_history:   Vec<DutyEntry>,
    mode:             DriverMode,
}

impl TripPlanner {
    pub fn new(legs: Vec<Leg>, start_time: NaiveDateTime) -> Self {
        Self {
            legs,
            start_time,
            cycle_hours_used: 0.0,
            limits:           HosLimits::default(),
            driver_history:   Vec::new(),
            mode:             DriverMode::default(),
        }
    }

    /// Like [`new`][Self::new] with an ISO-8601 start time.
    pub fn from_iso(legs: Vec<Leg>, start_time: &str) -> EngineResult<Self> {
        Ok(Self::new(legs, parse_start_time(start_time)?))
    }

    /// On-duty hours already used in the current 70-hour cycle.
    pub fn cycle_hours_used(mut self, hours: f64) -> Self {
        self.cycle_hours_used = hours;
        self
    }

    pub fn limits(mut self, limits: HosLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Prior duty entries of the driver.  Not yet used to seed the cycle.
    pub fn driver_history(mut self, history: Vec<DutyEntry>) -> Self {
        self.driver_history = history;
        self
    }

    pub fn mode(mut self, mode: DriverMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Check every input; nothing is emitted for a trip that fails here.
    pub fn validate(&self) -> EngineResult<()> {
        let max_hours = minutes_to_hours(MAX_DURATION_MINUTES);
        if !(0.0..=max_hours).contains(&self.cycle_hours_used) {
            return Err(HosError::InvalidCycleHours(self.cycle_hours_used).into());
        }
        self.limits.validate()?;
        validate_legs(&self.legs)?;
        Ok(())
    }

    /// Plan without callbacks.
    pub fn plan(&self) -> EngineResult<TripLog> {
        self.run(&mut NoopObserver)
    }

    /// Validate, simulate every leg, and aggregate the log sheets.
    #[instrument(skip_all, fields(legs = self.legs.len(), start = %self.start_time))]
    pub fn run<O: EngineObserver>(&self, observer: &mut O) -> EngineResult<TripLog> {
        self.validate()?;
        if !self.driver_history.is_empty() {
            warn!(
                entries = self.driver_history.len(),
                "driver history supplied but not applied; cycle taken from cycle_hours_used"
            );
        }
        if self.mode != DriverMode::SingleDriver {
            warn!(mode = ?self.mode, "team driving not supported; scheduling as a single driver");
        }

        let cycle_minutes = hours_to_minutes(self.cycle_hours_used);
        let mut engine = RuleEngine::new(self.limits.clone(), self.start_time, cycle_minutes, observer);
        for leg in &self.legs {
            engine.run_leg(leg)?;
        }
        let (entries, state) = engine.finish();

        // With nothing emitted the caller's figure is reported as given.
        let final_cycle_hours =
            if entries.is_empty() { self.cycle_hours_used } else { state.cycle_hours() };
        let log = TripLog {
            start_time: self.start_time,
            days:       DayAggregator.aggregate(&entries),
            entries,
            final_cycle_hours,
        };
        info!(
            entries = log.entries.len(),
            days = log.days.len(),
            end = %log.end_time(),
            cycle_hours = log.final_cycle_hours,
            "trip planned"
        );
        observer.on_trip_end(&log);
        Ok(log)
    }
}

/// Plan a trip with the FMCSA default limits.
///
/// `start_time` is ISO-8601; see [`parse_start_time`].
pub fn generate_logs(
    legs:             &[Leg],
    start_time:       &str,
    cycle_hours_used: f64,
) -> EngineResult<TripLog> {
    TripPlanner::from_iso(legs.to_vec(), start_time)?
        .cycle_hours_used(cycle_hours_used)
        .plan()
}
