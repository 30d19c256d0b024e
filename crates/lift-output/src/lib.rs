//! `lift-output` — run output for the lift simulator.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`writer`]   | `OutputWriter` trait                                  |
//! | [`csv`]      | `CsvWriter` — `requests.csv` and `ticks.csv`          |
//! | [`observer`] | `RunOutputObserver` — drives a writer from the engine |
//! | [`row`]      | `RequestRow`, `TickRow`                               |
//! | [`report`]   | `RunReport` — end-of-run counts and timings           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, RunOutputObserver, RunReport};
//!
//! let mut obs = RunOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! engine.run_with(200, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! println!("{}", RunReport::from_elevator(&engine));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use report::{Durations, RunReport};
pub use row::{RequestRow, TickRow};
pub use writer::OutputWriter;
