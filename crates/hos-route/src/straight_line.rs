//! Straight-line routing at a fixed average speed.
//!
//! Used when no directions service is configured, or as the last resort of
//! a [`FallbackProvider`][crate::FallbackProvider].  Distances are haversine
//! miles between consecutive stops, so real road distance is always
//! underestimated.

use hos_core::{GeoPoint, Leg};

use crate::{Route, RouteError, RouteLeg, RouteProvider, RouteResult, TripStops};

/// Highway average used for duration estimates.
pub const DEFAULT_SPEED_MPH: f64 = 55.0;

/// Two-leg route (current → pickup → dropoff) along great circles.
#[derive(Clone, Debug)]
pub struct StraightLineProvider {
    pub speed_mph: f64,
}

impl Default for StraightLineProvider {
    fn default() -> Self {
        Self { speed_mph: DEFAULT_SPEED_MPH }
    }
}

impl StraightLineProvider {
    pub fn new(speed_mph: f64) -> Self {
        Self { speed_mph }
    }

    fn leg(&self, index: usize, from: GeoPoint, to: GeoPoint) -> RouteResult<RouteLeg> {
        for p in [from, to] {
            if !p.is_valid() {
                return Err(RouteError::InvalidStop(p));
            }
        }
        let distance_miles = from.distance_miles(to);
        if distance_miles <= 0.0 {
            return Err(RouteError::NoRoute { from, to });
        }
        // Whole minutes, truncated; a positive distance always costs at least one.
        let duration_minutes = ((distance_miles / self.speed_mph * 60.0) as i64).max(1);
        Ok(RouteLeg {
            from,
            to,
            leg: Leg::new(index, distance_miles, duration_minutes),
        })
    }
}

impl RouteProvider for StraightLineProvider {
    fn name(&self) -> &str {
        "straight-line"
    }

    fn route(&self, stops: &TripStops) -> RouteResult<Route> {
        if !self.speed_mph.is_finite() || self.speed_mph <= 0.0 {
            return Err(RouteError::Unavailable(format!(
                "speed_mph must be positive (got {})",
                self.speed_mph
            )));
        }

        let mut to_pickup = self.leg(0, stops.current, stops.pickup)?;
        to_pickup.leg.is_pickup = true;

        let mut to_dropoff = self.leg(1, stops.pickup, stops.dropoff)?;
        to_dropoff.leg.is_dropoff = true;

        Ok(Route { legs: vec![to_pickup, to_dropoff] })
    }
}
