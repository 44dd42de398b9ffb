//! Routed travel legs, the engine's only trip input.

use crate::{HosError, HosResult, MAX_DURATION_MINUTES};

/// Longest leg accepted, roughly once around the Earth.
pub const MAX_LEG_MILES: f64 = 25_000.0;

/// One routed leg of the trip, in travel order.
///
/// `is_pickup` / `is_dropoff` mark a leg whose driving is preceded by a
/// loading or unloading stop.  At most one of them may be set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Zero-based position in the route.
    pub index:            usize,
    pub distance_miles:   f64,
    pub duration_minutes: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_pickup:        bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_dropoff:       bool,
}

impl Leg {
    pub fn new(index: usize, distance_miles: f64, duration_minutes: i64) -> Self {
        Self {
            index,
            distance_miles,
            duration_minutes,
            is_pickup: false,
            is_dropoff: false,
        }
    }

    pub fn pickup(mut self) -> Self {
        self.is_pickup = true;
        self
    }

    pub fn dropoff(mut self) -> Self {
        self.is_dropoff = true;
        self
    }

    /// Check the leg is something the engine can simulate.
    ///
    /// Rejects non-finite, non-positive or over-long distance
    /// ([`MAX_LEG_MILES`]), durations outside `1..=MAX_DURATION_MINUTES`, and
    /// legs flagged as both pickup and dropoff.
    pub fn validate(&self) -> HosResult<()> {
        let invalid = |reason: String| HosError::InvalidLeg { index: self.index, reason };

        if !self.distance_miles.is_finite() || self.distance_miles <= 0.0 {
            return Err(invalid(format!(
                "distance_miles must be positive (got {})",
                self.distance_miles
            )));
        }
        if self.distance_miles > MAX_LEG_MILES {
            return Err(invalid(format!(
                "distance_miles must be at most {MAX_LEG_MILES} (got {})",
                self.distance_miles
            )));
        }
        if self.duration_minutes <= 0 {
            return Err(invalid(format!(
                "duration_minutes must be positive (got {})",
                self.duration_minutes
            )));
        }
        if self.duration_minutes > MAX_DURATION_MINUTES {
            return Err(invalid(format!(
                "duration_minutes must be at most {MAX_DURATION_MINUTES} (got {})",
                self.duration_minutes
            )));
        }
        if self.is_pickup && self.is_dropoff {
            return Err(invalid("a leg cannot be both pickup and dropoff".to_owned()));
        }
        Ok(())
    }
}

/// Validate every leg, stopping at the first failure.
pub fn validate_legs(legs: &[Leg]) -> HosResult<()> {
    legs.iter().try_for_each(Leg::validate)
}
