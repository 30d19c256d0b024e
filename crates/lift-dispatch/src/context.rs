//! Read-only cabin state passed to policies and observers.

use lift_core::{Direction, Floor, Request, RequestId, Tick};

/// A read-only snapshot of the engine handed to every
/// [`DispatchPolicy`][crate::DispatchPolicy] and
/// [`DispatchObserver`][crate::DispatchObserver] callback.
///
/// Borrows live for the duration of one callback; the engine never mutates
/// its state while a `CabinView` is alive.
#[derive(Clone, Copy)]
pub struct CabinView<'a> {
    /// Current simulation tick.
    pub now: Tick,

    /// Floor the cabin is at.
    pub floor: Floor,

    /// Number of floors in the building.
    pub floors: u32,

    /// Committed travel direction (`Stopped` while idle or deciding).
    pub direction: Direction,

    /// Last direction the cabin actually travelled in.  `Stopped` until the
    /// first move.
    pub heading: Direction,

    /// The full request arena, indexed by `RequestId`.
    pub requests: &'a [Request],

    /// Visible requests that have not boarded, in arrival order.
    pub waiting: &'a [RequestId],

    /// Boarded requests awaiting drop-off, in boarding order.
    pub riding: &'a [RequestId],
}

impl<'a> CabinView<'a> {
    #[inline]
    pub fn request(&self, id: RequestId) -> &'a Request {
        &self.requests[id.index()]
    }

    /// Every outstanding target floor: riders' destinations first, then the
    /// origins of waiters that have not boarded.
    pub fn targets(&self) -> impl Iterator<Item = Floor> + '_ {
        let view = *self;
        let drop_offs = self.riding.iter().map(move |&id| view.request(id).destination());
        let pickups = self
            .waiting
            .iter()
            .map(move |&id| view.request(id))
            .filter(|r| !r.is_boarded())
            .map(Request::origin);
        drop_offs.chain(pickups)
    }

    /// Does any outstanding target lie strictly beyond the cabin in
    /// `direction`?
    pub fn demand_ahead(&self, direction: Direction) -> bool {
        self.targets().any(|target| direction.is_ahead(self.floor, target))
    }

    /// `true` if nobody is waiting or riding.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.waiting.is_empty() && self.riding.is_empty()
    }
}
