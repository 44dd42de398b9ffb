//! `hos-route`: the route collaborator the hours-of-service engine consumes.
//!
//! The engine never computes routes itself; it takes an ordered `Vec<Leg>`.
//! This crate defines where those legs come from.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`provider`]      | `RouteProvider` trait, `TripStops`, `Route`, `RouteLeg`   |
//! | [`straight_line`] | `StraightLineProvider` (haversine miles at 55 mph)        |
//! | [`fallback`]      | `RetryPolicy`, `FallbackProvider` (retry, then fall back) |
//! | [`loader`]        | `load_legs_csv`, `load_legs_reader`                       |
//! | [`error`]         | `RouteError`, `RouteResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod fallback;
pub mod loader;
pub mod provider;
pub mod straight_line;


pub use error::{RouteError, RouteResult};
pub use fallback::{FallbackProvider, RetryPolicy};
pub use loader::{load_legs_csv, load_legs_reader};
pub use provider::{Route, RouteLeg, RouteProvider, TripStops};
pub use straight_line::StraightLineProvider;
