//! Retry-then-fall-back composition of two providers.
//!
//! ```text
//! attempt 1 ─fail─▶ sleep base ─▶ attempt 2 ─fail─▶ sleep 2·base ─▶ attempt 3 ─fail─▶ fallback
//! ```
//!
//! A primary that answers with zero legs counts as a failed attempt.

use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::{Route, RouteProvider, RouteResult, TripStops};

/// Exponential backoff schedule for the primary provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts against the primary, including the first.
    pub max_attempts: u32,
    /// Delay after the first failure; doubled after each further failure.
    pub base_delay:   Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3, base_delay: Duration::from_secs(1) }
    }
}

impl RetryPolicy {
    /// A policy that retries without sleeping (tests, offline batch runs).
    pub fn immediate(max_attempts: u32) -> Self {
        Self { max_attempts, base_delay: Duration::ZERO }
    }

    /// Delay to wait after the failed attempt `attempt` (zero-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(1u32.checked_shl(attempt).unwrap_or(u32::MAX))
    }
}

/// Tries `primary` under a [`RetryPolicy`], then routes with `fallback`.
pub struct FallbackProvider<P: RouteProvider, F: RouteProvider> {
    primary:  P,
    fallback: F,
    policy:   RetryPolicy,
}

impl<P: RouteProvider, F: RouteProvider> FallbackProvider<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback, policy: RetryPolicy::default() }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

impl<P: RouteProvider, F: RouteProvider> RouteProvider for FallbackProvider<P, F> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn route(&self, stops: &TripStops) -> RouteResult<Route> {
        let attempts = self.policy.max_attempts;
        for attempt in 0..attempts {
            info!(provider = self.primary.name(), attempt = attempt + 1, attempts, "routing attempt");
            match self.primary.route(stops) {
                Ok(route) if !route.legs.is_empty() => return Ok(route),
                Ok(_) => {
                    warn!(provider = self.primary.name(), attempt = attempt + 1, "provider returned no legs");
                }
                Err(e) => {
                    warn!(provider = self.primary.name(), attempt = attempt + 1, error = %e, "routing attempt failed");
                }
            }
            if attempt + 1 < attempts {
                let delay = self.policy.delay_after(attempt);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
        }

        warn!(
            primary = self.primary.name(),
            fallback = self.fallback.name(),
            "all routing attempts failed, using fallback"
        );
        self.fallback.route(stops)
    }
}
