//! `hos-engine`: the hours-of-service rule engine.
//!
//! # Per-leg loop
//!
//! ```text
//! for leg in legs:
//!   ① Service: pickup / dropoff legs open with a 60-minute on-duty stop
//!              (preceded by any due break or restart).
//!   ② Loop while driving remains:
//!       settle: 30-minute break after 8 h driving; 34-hour restart once
//!               the 70-hour cycle is spent (the restart wins).
//!       drive:  as much as the 11 h / 14 h / 8 h / 70 h limits allow.
//!       fuel:   20-minute stop for every passed 1000-mile trigger.
//!       rest:   10 hours off once the 14-hour window is spent.
//! ```
//!
//! The finished entry stream is handed to [`hos_logsheet::DayAggregator`]
//! for the per-day sheets.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`plan_many`] runs trips on Rayon's thread pool.       |
//! | `serde`    | `Serialize`/`Deserialize` on `TripLog` and `DriverMode`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_core::Leg;
//! use hos_engine::{NoopObserver, TripPlanner};
//!
//! let legs = vec![Leg::new(0, 212.4, 230).pickup(), Leg::new(1, 1480.0, 1610).dropoff()];
//! let log = TripPlanner::from_iso(legs, "2025-01-06T08:00:00")?
//!     .cycle_hours_used(12.0)
//!     .run(&mut NoopObserver)?;
//! ```

pub mod batch;
pub mod engine;
pub mod error;
pub mod fuel;
pub mod legs;
pub mod observer;
pub mod planner;
pub mod state;
pub mod trip_log;
pub mod window;

#[cfg(test)]
mod tests;

pub use batch::plan_many;
pub use engine::RuleEngine;
pub use error::{EngineError, EngineResult};
pub use fuel::{FuelPlan, FuelStop};
pub use legs::LegProcessor;
pub use observer::{EngineObserver, NoopObserver};
pub use planner::{DriverMode, TripPlanner, generate_logs};
pub use state::SimulationState;
pub use trip_log::TripLog;
pub use window::{WindowTotals, WindowTracker};
