//! Per-leg demand: the loading/unloading stop and the fuel plan.

use chrono::NaiveDateTime;

use hos_core::{EntryKind, HosLimits, Leg};

use crate::FuelPlan;

/// Turns a [`Leg`] into the work the rule engine must schedule for it.
#[derive(Clone, Debug)]
pub struct LegProcessor {
    service_minutes: i64,
    fuel_interval:   f64,
}

impl LegProcessor {
    pub fn new(limits: &HosLimits) -> Self {
        Self {
            service_minutes: limits.pickup_dropoff_minutes,
            fuel_interval:   limits.fuel_interval_miles,
        }
    }

    /// The on-duty stop that precedes the leg's driving, if any.
    pub fn service_stop(&self, leg: &Leg) -> Option<(EntryKind, i64)> {
        if leg.is_pickup {
            Some((EntryKind::Pickup, self.service_minutes))
        } else if leg.is_dropoff {
            Some((EntryKind::Dropoff, self.service_minutes))
        } else {
            None
        }
    }

    /// Fuel triggers measured from the instant the leg begins, ahead of any
    /// loading or unloading stop.
    pub fn fuel_plan(&self, leg: &Leg, leg_start: NaiveDateTime) -> FuelPlan {
        FuelPlan::schedule(
            leg_start,
            leg.distance_miles,
            leg.duration_minutes,
            self.fuel_interval,
        )
    }
}
