//! The passenger request record.
//!
//! A request moves through three stages:
//!
//! 1. **waiting** at `origin` once `request_time` has been reached;
//! 2. **riding** after boarding, heading for `destination`;
//! 3. **serviced** once the cabin drops the passenger at `destination`.
//!
//! Lifecycle timestamps are stored as `Option<Tick>`, so `serviced ⟹ boarded`
//! and "arrival time set at most once" are enforced by the setters rather
//! than by sentinel values.

use crate::{Floor, Tick};

/// One passenger's journey.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    request_time: Tick,
    origin:       Floor,
    destination:  Floor,
    boarded_at:   Option<Tick>,
    arrival_time: Option<Tick>,
}

impl Request {
    /// A fresh, not-yet-visible request.
    ///
    /// `origin != destination` is a caller contract; the dispatch builder
    /// rejects requests that break it.
    pub fn new(request_time: Tick, origin: Floor, destination: Floor) -> Self {
        Self {
            request_time,
            origin,
            destination,
            boarded_at:   None,
            arrival_time: None,
        }
    }

    #[inline]
    pub fn request_time(&self) -> Tick {
        self.request_time
    }

    #[inline]
    pub fn origin(&self) -> Floor {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    #[inline]
    pub fn is_going_up(&self) -> bool {
        self.destination > self.origin
    }

    /// Has the passenger entered the cabin?
    #[inline]
    pub fn is_boarded(&self) -> bool {
        self.boarded_at.is_some()
    }

    /// Has the passenger reached `destination`?
    #[inline]
    pub fn is_serviced(&self) -> bool {
        self.arrival_time.is_some()
    }

    /// Tick at which the passenger boarded, if they have.
    #[inline]
    pub fn boarded_at(&self) -> Option<Tick> {
        self.boarded_at
    }

    /// Tick at which the passenger arrived, if serviced.
    #[inline]
    pub fn arrival_time(&self) -> Option<Tick> {
        self.arrival_time
    }

    /// The single "floor of interest" for display layers: `None` once
    /// serviced, the destination while riding, the origin while waiting.
    pub fn requested_floor(&self) -> Option<Floor> {
        if self.is_serviced() {
            None
        } else if self.is_boarded() {
            Some(self.destination)
        } else {
            Some(self.origin)
        }
    }

    /// Ticks spent waiting before boarding.
    pub fn wait_ticks(&self) -> Option<u64> {
        self.boarded_at.map(|t| t.since(self.request_time))
    }

    /// Ticks from request to arrival.
    pub fn journey_ticks(&self) -> Option<u64> {
        self.arrival_time.map(|t| t.since(self.request_time))
    }

    // ── Mutators (dispatch engine only) ───────────────────────────────────

    /// Record boarding at `now`.  A second call keeps the first tick.
    pub fn mark_boarded(&mut self, now: Tick) {
        if self.boarded_at.is_none() {
            self.boarded_at = Some(now);
        }
    }

    /// Record arrival at `now`.
    ///
    /// No-op unless the passenger has boarded and has not already arrived.
    /// Returns `true` if the arrival was recorded.
    pub fn mark_serviced(&mut self, now: Tick) -> bool {
        if self.boarded_at.is_none() || self.arrival_time.is_some() {
            return false;
        }
        self.arrival_time = Some(now);
        true
    }
}
