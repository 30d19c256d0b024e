//! `lift-dispatch` — the single-cabin dispatch engine.
//!
//! # Tick loop
//!
//! ```text
//! while now < end:
//!   ① Ingest   — requests due at `now` join `waiting`; a cabin at rest
//!                boards everyone waiting on its floor.
//!   ② Advance  — moving: one Move.
//!                stopped with demand: DispatchPolicy::select_direction,
//!                then one Move if a direction was chosen.
//!                otherwise: idle tick.
//!
//! Move:
//!   floor ± 1, now + 1, Ingest
//!   Resolve    — riders for this floor alight, waiters on this floor board
//!   exchanged? — now + 1 (door dwell), Ingest
//!   Continue?  — stop unless demand remains strictly ahead
//!   Terminal   — top floor going up / ground floor going down → stop
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`engine`]   | `DispatchEngine<P>` — state and the tick loop             |
//! | [`elevator`] | `Elevator` trait — `run` / `move_to_floor` / inspectors   |
//! | [`policy`]   | `DispatchPolicy` trait, `NearestStop`, `SweepPolicy`      |
//! | [`context`]  | `CabinView<'a>` — read-only state handed to policies      |
//! | [`observer`] | `DispatchObserver` trait, `NoopObserver`                  |
//! | [`builder`]  | `DispatchBuilder` — validation and construction           |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{Floor, Request, Tick};
//! use lift_dispatch::{DispatchEngine, Elevator};
//!
//! let requests = vec![Request::new(Tick(0), Floor(1), Floor(5))];
//! let mut engine = DispatchEngine::new(10, requests)?;
//! engine.run(20);
//! assert!(engine.requests()[0].is_serviced());
//! ```

pub mod builder;
pub mod context;
pub mod elevator;
pub mod engine;
pub mod error;
pub mod observer;
pub mod policy;


pub use builder::DispatchBuilder;
pub use context::CabinView;
pub use elevator::Elevator;
pub use engine::DispatchEngine;
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use policy::{DispatchPolicy, NearestStop, SweepPolicy};
