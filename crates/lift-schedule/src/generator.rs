//! Seeded random passenger lists.
//!
//! Each passenger gets an origin and destination drawn uniformly from the
//! building's floors (re-drawn until they differ) and a request time drawn
//! uniformly from `0..window_ticks`.  The output is sorted by request time
//! so that it reads like a hand-written request file.

use log::debug;

use lift_core::{Floor, Request, SimRng, Tick};

use crate::{ScheduleError, ScheduleResult};

/// Parameters for a generated request list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassengerGenerator {
    pub floors:       u32,
    pub passengers:   usize,
    /// Request times are drawn from `0..window_ticks`.
    pub window_ticks: u64,
}

impl PassengerGenerator {
    pub fn new(floors: u32, passengers: usize, window_ticks: u64) -> Self {
        Self { floors, passengers, window_ticks }
    }

    /// Draw `passengers` requests from `rng`.
    ///
    /// # Errors
    ///
    /// A building with fewer than two floors has no valid journeys, and an
    /// empty time window has no valid request times.
    pub fn generate(&self, rng: &mut SimRng) -> ScheduleResult<Vec<Request>> {
        if self.floors < 2 {
            return Err(ScheduleError::Generator(format!(
                "need at least 2 floors to generate journeys, got {}",
                self.floors
            )));
        }
        if self.window_ticks == 0 && self.passengers > 0 {
            return Err(ScheduleError::Generator("window_ticks must be positive".into()));
        }

        let mut requests: Vec<Request> = (0..self.passengers)
            .map(|_| {
                let time = rng.gen_range(0..self.window_ticks);
                let (origin, destination) = loop {
                    let o = rng.gen_range(1..=self.floors);
                    let d = rng.gen_range(1..=self.floors);
                    if o != d {
                        break (o, d);
                    }
                };
                Request::new(Tick(time), Floor(origin), Floor(destination))
            })
            .collect();

        requests.sort_by_key(Request::request_time);
        debug!(
            "generated {} passengers over {} floors within {} ticks",
            requests.len(), self.floors, self.window_ticks
        );
        Ok(requests)
    }
}
