use chrono::NaiveDateTime;
use hos_core::HosError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid trip input: {0}")]
    Input(#[from] HosError),

    #[error("no admissible driving on leg {leg_index} at {at} under the configured limits")]
    Stalled {
        leg_index: usize,
        at:        NaiveDateTime,
    },

    #[error("trip clock ran past the end of the calendar at {at}")]
    ClockOverflow { at: NaiveDateTime },
}

pub type EngineResult<T> = Result<T, EngineError>;
