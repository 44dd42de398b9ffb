//! Hours-of-service limit configuration.
//!
//! Every regulatory constant the engine consults lives in [`HosLimits`].
//! `Default` is the FMCSA property-carrying 70-hour/8-day rule set.  With
//! the `serde` feature the struct can be loaded from JSON; omitted fields
//! keep their defaults.

use crate::{HosError, HosResult, MAX_DURATION_MINUTES};

/// Shortest fuel interval accepted.
pub const MIN_FUEL_INTERVAL_MILES: f64 = 1.0;

/// Limits and fixed durations, all in minutes except the fuel interval.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HosLimits {
    /// Driving allowed inside one duty window.  Default: 660 (11 h).
    pub max_driving_minutes: i64,

    /// On-duty time allowed inside one duty window.  Default: 840 (14 h).
    pub max_on_duty_minutes: i64,

    /// Length of the trailing window the two limits above are measured
    /// over.  Default: 840 (14 h).
    pub window_span_minutes: i64,

    /// Cumulative driving that triggers a mandatory break.  Default: 480 (8 h).
    pub break_after_driving_minutes: i64,

    /// Length of the mandatory break.  Default: 30.
    pub break_minutes: i64,

    /// On-duty time allowed in the rolling cycle.  Default: 4200 (70 h).
    pub cycle_limit_minutes: i64,

    /// Length of the off-duty restart that zeroes the cycle.  Default: 2040 (34 h).
    pub restart_minutes: i64,

    /// Length of the off-duty rest that opens a fresh window.  Default: 600 (10 h).
    pub daily_rest_minutes: i64,

    /// Distance between fuel stops.  Default: 1000 mi.
    pub fuel_interval_miles: f64,

    /// Length of one fuel stop.  Default: 20.
    pub fuel_stop_minutes: i64,

    /// Length of the loading / unloading stop before a pickup or dropoff leg.
    /// Default: 60.
    pub pickup_dropoff_minutes: i64,
}

impl Default for HosLimits {
    fn default() -> Self {
        Self {
            max_driving_minutes:         11 * 60,
            max_on_duty_minutes:         14 * 60,
            window_span_minutes:         14 * 60,
            break_after_driving_minutes: 8 * 60,
            break_minutes:               30,
            cycle_limit_minutes:         70 * 60,
            restart_minutes:             34 * 60,
            daily_rest_minutes:          10 * 60,
            fuel_interval_miles:         1_000.0,
            fuel_stop_minutes:           20,
            pickup_dropoff_minutes:      60,
        }
    }
}

impl HosLimits {
    /// Reject values the engine cannot make progress with.
    ///
    /// Every duration must lie in `1..=MAX_DURATION_MINUTES`; a zero driving
    /// allowance or break trigger would stall the simulation loop.  The fuel
    /// interval must be finite and at least [`MIN_FUEL_INTERVAL_MILES`].
    pub fn validate(&self) -> HosResult<()> {
        let minutes = [
            ("max_driving_minutes", self.max_driving_minutes),
            ("max_on_duty_minutes", self.max_on_duty_minutes),
            ("window_span_minutes", self.window_span_minutes),
            ("break_after_driving_minutes", self.break_after_driving_minutes),
            ("break_minutes", self.break_minutes),
            ("cycle_limit_minutes", self.cycle_limit_minutes),
            ("restart_minutes", self.restart_minutes),
            ("daily_rest_minutes", self.daily_rest_minutes),
            ("fuel_stop_minutes", self.fuel_stop_minutes),
            ("pickup_dropoff_minutes", self.pickup_dropoff_minutes),
        ];
        for (name, value) in minutes {
            if value <= 0 {
                return Err(HosError::Config(format!("{name} must be positive (got {value})")));
            }
            if value > MAX_DURATION_MINUTES {
                return Err(HosError::Config(format!(
                    "{name} must be at most {MAX_DURATION_MINUTES} (got {value})"
                )));
            }
        }
        if !self.fuel_interval_miles.is_finite() || self.fuel_interval_miles < MIN_FUEL_INTERVAL_MILES {
            return Err(HosError::Config(format!(
                "fuel_interval_miles must be at least {MIN_FUEL_INTERVAL_MILES} (got {})",
                self.fuel_interval_miles
            )));
        }
        Ok(())
    }
}
