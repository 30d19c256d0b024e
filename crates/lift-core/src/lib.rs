//! `lift-core` — foundational types for the lift simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `RequestId`                                            |
//! | [`floor`]     | `Floor`, `Direction`                                   |
//! | [`time`]      | `Tick`                                                 |
//! | [`request`]   | `Request` — one passenger's journey record             |
//! | [`config`]    | `SimConfig`, `PolicyKind`                              |
//! | [`rng`]       | `SimRng` (seeded, reproducible)                        |
//! | [`error`]     | `LiftError`, `LiftResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod request;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PolicyKind, SimConfig};
pub use error::{LiftError, LiftResult};
pub use floor::{Direction, Floor};
pub use ids::RequestId;
pub use request::Request;
pub use rng::SimRng;
pub use time::Tick;
