//! Input-validation error type.
//!
//! Every variant is raised before the engine emits a single entry, so a
//! caller never sees partial output.  Sub-crates wrap `HosError` as one
//! variant of their own error enums via `#[from]`.

use thiserror::Error;

/// The top-level error type for `hos-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum HosError {
    #[error("leg {index} is invalid: {reason}")]
    InvalidLeg { index: usize, reason: String },

    #[error("cannot parse start time {input:?}: {reason}")]
    InvalidStartTime { input: String, reason: String },

    #[error("current cycle hours must be finite, non-negative and at most one year (got {0})")]
    InvalidCycleHours(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

impl HosError {
    /// `true` for errors caused by malformed trip input rather than by the
    /// limit configuration.
    pub fn is_input_validation(&self) -> bool {
        !matches!(self, HosError::Config(_))
    }
}

/// Shorthand result type for all `hos-*` crates.
pub type HosResult<T> = Result<T, HosError>;
