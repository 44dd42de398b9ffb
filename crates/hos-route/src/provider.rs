//! Route provider trait and the route shape it returns.
//!
//! # Pluggability
//!
//! Applications call routing through the [`RouteProvider`] trait, so a
//! directions API client, a cached lookup, or the built-in
//! [`StraightLineProvider`][crate::StraightLineProvider] can be swapped in
//! without touching the engine.  Providers own their retry and fallback
//! policy; see [`FallbackProvider`][crate::FallbackProvider].

use hos_core::{GeoPoint, Leg};

use crate::RouteResult;

// ── TripStops ─────────────────────────────────────────────────────────────────

/// The three stops of a single-load trip.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripStops {
    /// Where the driver is now.
    pub current: GeoPoint,
    pub pickup:  GeoPoint,
    pub dropoff: GeoPoint,
}

impl TripStops {
    pub fn new(current: GeoPoint, pickup: GeoPoint, dropoff: GeoPoint) -> Self {
        Self { current, pickup, dropoff }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// One routed leg together with its endpoints.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    pub from: GeoPoint,
    pub to:   GeoPoint,
    pub leg:  Leg,
}

/// The result of a routing query: legs in travel order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub legs: Vec<RouteLeg>,
}

impl Route {
    pub fn total_distance_miles(&self) -> f64 {
        self.legs.iter().map(|l| l.leg.distance_miles).sum()
    }

    pub fn total_duration_minutes(&self) -> i64 {
        self.legs.iter().map(|l| l.leg.duration_minutes).sum()
    }

    /// Strip endpoints, keeping only what the engine consumes.
    pub fn into_legs(self) -> Vec<Leg> {
        self.legs.into_iter().map(|l| l.leg).collect()
    }
}

// ── RouteProvider trait ───────────────────────────────────────────────────────

/// Pluggable routing collaborator.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a single provider can serve
/// batch planning across worker threads.
pub trait RouteProvider: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    /// Route current → pickup → dropoff.
    ///
    /// The first leg must be flagged `is_pickup` and the last `is_dropoff`.
    fn route(&self, stops: &TripStops) -> RouteResult<Route>;
}
