//! `lift-schedule`: where requests come from and when they become visible.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`loader`]     | `load_requests`, `load_requests_reader`, `RequestFile`    |
//! | [`generator`]  | `PassengerGenerator` — seeded random request lists        |
//! | [`release`]    | `ReleaseQueue` (`BTreeMap<Tick, Vec<RequestId>>`)         |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! The request list is always known up front.  `ReleaseQueue` indexes it by
//! request time so the engine only looks at the requests due at the current
//! tick instead of scanning the whole list.

pub mod error;
pub mod generator;
pub mod loader;
pub mod release;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use generator::PassengerGenerator;
pub use loader::{FileHeader, RequestFile, load_requests, load_requests_reader};
pub use release::ReleaseQueue;
