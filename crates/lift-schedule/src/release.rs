//! Requests indexed by the tick they become visible.
//!
//! The engine may ingest at the same tick more than once (before a move,
//! after it, and after a door dwell), so lookups do not drain: requests due
//! at a tick stay queryable for as long as that tick is current.

use std::collections::BTreeMap;

use lift_core::{Request, RequestId, Tick};

/// Maps request ticks → requests that become visible at that tick, in arena
/// order.
#[derive(Default, Debug)]
pub struct ReleaseQueue {
    inner: BTreeMap<Tick, Vec<RequestId>>,
    /// Cached total request count for O(1) `len()`.
    total: usize,
}

impl ReleaseQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every request in `requests` (positions become `RequestId`s).
    pub fn build_from_requests(requests: &[Request]) -> Self {
        let mut queue = Self::new();
        for (i, request) in requests.iter().enumerate() {
            queue.push(request.request_time(), RequestId(i as u32));
        }
        queue
    }

    pub fn push(&mut self, tick: Tick, request: RequestId) {
        self.inner.entry(tick).or_default().push(request);
        self.total += 1;
    }

    /// Requests whose request time is exactly `tick`.  Empty for most ticks.
    pub fn due(&self, tick: Tick) -> &[RequestId] {
        self.inner.get(&tick).map_or(&[], Vec::as_slice)
    }

    /// Latest release tick, or `None` if empty.
    pub fn last_tick(&self) -> Option<Tick> {
        self.inner.keys().next_back().copied()
    }

    /// Total number of indexed requests.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct release ticks.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
