//! Route-subsystem error type.

use thiserror::Error;

use hos_core::{GeoPoint, HosError};

/// Errors produced by `hos-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route provider unavailable: {0}")]
    Unavailable(String),

    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoPoint, to: GeoPoint },

    #[error("invalid stop {0}: coordinates out of range")]
    InvalidStop(GeoPoint),

    #[error("leg parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Leg(#[from] HosError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
