//! End-of-run statistics.

use std::fmt;

use lift_core::{Request, Tick};
use lift_dispatch::Elevator;

/// Mean and maximum of a set of tick durations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Durations {
    pub count: usize,
    pub mean:  f64,
    pub max:   u64,
}

impl Durations {
    fn summarize(values: impl Iterator<Item = u64>) -> Self {
        let (mut count, mut sum, mut max) = (0usize, 0u64, 0u64);
        for v in values {
            count += 1;
            sum += v;
            max = max.max(v);
        }
        let mean = if count == 0 { 0.0 } else { sum as f64 / count as f64 };
        Self { count, mean, max }
    }
}

/// Where every request stood when a run returned, plus timing statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub final_tick: Tick,
    pub total:      usize,
    pub served:     usize,
    pub waiting:    usize,
    pub riding:     usize,
    /// Requests whose time had not yet come.
    pub pending:    usize,
    /// Request to boarding, over every boarded request.
    pub wait:       Durations,
    /// Request to arrival, over every served request.
    pub journey:    Durations,
}

impl RunReport {
    pub fn from_elevator<E: Elevator>(elevator: &E) -> Self {
        Self::from_parts(
            elevator.now(),
            elevator.requests(),
            elevator.waiting().len(),
            elevator.riding().len(),
        )
    }

    fn from_parts(final_tick: Tick, requests: &[Request], waiting: usize, riding: usize) -> Self {
        let served = requests.iter().filter(|r| r.is_serviced()).count();
        Self {
            final_tick,
            total: requests.len(),
            served,
            waiting,
            riding,
            pending: requests.len().saturating_sub(served + waiting + riding),
            wait:    Durations::summarize(requests.iter().filter_map(Request::wait_ticks)),
            journey: Durations::summarize(requests.iter().filter_map(Request::journey_ticks)),
        }
    }

    /// `true` once every request has reached its destination.
    pub fn all_served(&self) -> bool {
        self.served == self.total
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "run ended at {}", self.final_tick)?;
        writeln!(
            f,
            "  requests: {} total, {} served, {} riding, {} waiting, {} pending",
            self.total, self.served, self.riding, self.waiting, self.pending
        )?;
        writeln!(f, "  wait:     mean {:.2} ticks, max {}", self.wait.mean, self.wait.max)?;
        write!(f, "  journey:  mean {:.2} ticks, max {}", self.journey.mean, self.journey.max)
    }
}
