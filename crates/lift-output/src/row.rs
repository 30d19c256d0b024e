//! Plain data rows handed to output backends.

use lift_core::{Request, RequestId};
use lift_dispatch::CabinView;

/// Final state of one request.
///
/// Optional ticks are `None` for passengers who never boarded or never
/// arrived; backends write them as empty fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestRow {
    pub request_id:   u32,
    pub request_time: u64,
    pub origin:       u32,
    pub destination:  u32,
    pub boarded_at:   Option<u64>,
    pub arrival_time: Option<u64>,
}

impl RequestRow {
    pub fn from_request(id: RequestId, request: &Request) -> Self {
        Self {
            request_id:   id.0,
            request_time: request.request_time().0,
            origin:       request.origin().0,
            destination:  request.destination().0,
            boarded_at:   request.boarded_at().map(|t| t.0),
            arrival_time: request.arrival_time().map(|t| t.0),
        }
    }
}

/// Cabin state at the end of one loop step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRow {
    pub tick:      u64,
    pub floor:     u32,
    pub direction: &'static str,
    pub waiting:   u32,
    pub riding:    u32,
}

impl TickRow {
    pub fn from_view(view: &CabinView<'_>) -> Self {
        Self {
            tick:      view.now.0,
            floor:     view.floor.0,
            direction: view.direction.as_str(),
            waiting:   view.waiting.len() as u32,
            riding:    view.riding.len() as u32,
        }
    }
}
