//! Fuel-stop triggers for long legs.

use chrono::{Duration, NaiveDateTime};

/// A fuel stop that falls due once the clock reaches `trigger`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuelStop {
    pub trigger: NaiveDateTime,
    /// Leg mileage the stop is scheduled at, for the entry note.
    pub at_mile: f64,
}

/// The fuel stops of one leg, consumed in trigger order.
#[derive(Clone, Debug, Default)]
pub struct FuelPlan {
    stops: Vec<FuelStop>,
    next:  usize,
}

impl FuelPlan {
    /// Triggers for a leg that began at `leg_start`.
    ///
    /// Only legs strictly longer than `interval_miles` get stops:
    /// `floor(distance / interval)` of them, each at
    /// `leg_start + (stop_mile / distance) × duration`.  A trigger past the
    /// end of the calendar is never due.
    pub fn schedule(
        leg_start:        NaiveDateTime,
        distance_miles:   f64,
        duration_minutes: i64,
        interval_miles:   f64,
    ) -> Self {
        if distance_miles <= interval_miles {
            return Self::default();
        }
        let count = (distance_miles / interval_miles).floor() as usize;
        let stops = (1..=count)
            .map(|i| {
                let at_mile = i as f64 * interval_miles;
                let offset_secs = at_mile / distance_miles * duration_minutes as f64 * 60.0;
                let trigger = Duration::try_seconds(offset_secs.round() as i64)
                    .and_then(|offset| leg_start.checked_add_signed(offset))
                    .unwrap_or(NaiveDateTime::MAX);
                FuelStop { trigger, at_mile }
            })
            .collect();
        Self { stops, next: 0 }
    }

    /// Pop the next stop if it is due at `now`.
    pub fn next_due(&mut self, now: NaiveDateTime) -> Option<FuelStop> {
        let stop = *self.stops.get(self.next)?;
        if stop.trigger > now {
            return None;
        }
        self.next += 1;
        Some(stop)
    }

    pub fn stops(&self) -> &[FuelStop] {
        &self.stops
    }

    /// Stops not yet taken.
    pub fn pending(&self) -> usize {
        self.stops.len() - self.next
    }
}
