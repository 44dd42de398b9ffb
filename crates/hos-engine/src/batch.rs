//! Planning many independent trips at once.
//!
//! Each trip is a pure function of its planner's inputs, so trips share no
//! state and can run on any thread.  With the `parallel` feature the batch
//! is spread over Rayon's thread pool; results keep the input order either
//! way.

use crate::{EngineResult, TripLog, TripPlanner};

/// Plan every trip, returning one result per planner in input order.
pub fn plan_many(planners: &[TripPlanner]) -> Vec<EngineResult<TripLog>> {
    #[cfg(not(feature = "parallel"))]
    {
        planners.iter().map(TripPlanner::plan).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        planners.par_iter().map(TripPlanner::plan).collect()
    }
}
