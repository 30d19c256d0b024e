//! Observer trait for presentation layers, tracing, and data collection.

use lift_core::{Direction, Floor, Request, RequestId, Tick};

use crate::CabinView;

/// Callbacks invoked by the engine at key points of the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A display layer typically implements
/// only [`on_tick_end`][Self::on_tick_end] and redraws from the view.
///
/// # Example
///
/// ```rust,ignore
/// struct FloorPrinter;
///
/// impl DispatchObserver for FloorPrinter {
///     fn on_tick_end(&mut self, view: &CabinView<'_>) {
///         println!("{} at {} going {}", view.now, view.floor, view.direction);
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// A stopped cabin committed to a new direction.
    fn on_direction(&mut self, _now: Tick, _floor: Floor, _direction: Direction) {}

    /// A passenger entered the cabin.
    fn on_board(&mut self, _now: Tick, _floor: Floor, _id: RequestId, _request: &Request) {}

    /// A passenger reached their destination.
    fn on_alight(&mut self, _now: Tick, _floor: Floor, _id: RequestId, _request: &Request) {}

    /// Called after every loop step (an idle tick, or one move including any
    /// door dwell).
    fn on_tick_end(&mut self, _view: &CabinView<'_>) {}

    /// Called once when a run returns.
    fn on_run_end(&mut self, _final_tick: Tick, _requests: &[Request]) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

/// Report to both observers, first to last.
impl<A: DispatchObserver, B: DispatchObserver> DispatchObserver for (A, B) {
    fn on_direction(&mut self, now: Tick, floor: Floor, direction: Direction) {
        self.0.on_direction(now, floor, direction);
        self.1.on_direction(now, floor, direction);
    }

    fn on_board(&mut self, now: Tick, floor: Floor, id: RequestId, request: &Request) {
        self.0.on_board(now, floor, id, request);
        self.1.on_board(now, floor, id, request);
    }

    fn on_alight(&mut self, now: Tick, floor: Floor, id: RequestId, request: &Request) {
        self.0.on_alight(now, floor, id, request);
        self.1.on_alight(now, floor, id, request);
    }

    fn on_tick_end(&mut self, view: &CabinView<'_>) {
        self.0.on_tick_end(view);
        self.1.on_tick_end(view);
    }

    fn on_run_end(&mut self, final_tick: Tick, requests: &[Request]) {
        self.0.on_run_end(final_tick, requests);
        self.1.on_run_end(final_tick, requests);
    }
}

/// An optional observer; `None` ignores every callback.
impl<O: DispatchObserver> DispatchObserver for Option<O> {
    fn on_direction(&mut self, now: Tick, floor: Floor, direction: Direction) {
        if let Some(o) = self {
            o.on_direction(now, floor, direction);
        }
    }

    fn on_board(&mut self, now: Tick, floor: Floor, id: RequestId, request: &Request) {
        if let Some(o) = self {
            o.on_board(now, floor, id, request);
        }
    }

    fn on_alight(&mut self, now: Tick, floor: Floor, id: RequestId, request: &Request) {
        if let Some(o) = self {
            o.on_alight(now, floor, id, request);
        }
    }

    fn on_tick_end(&mut self, view: &CabinView<'_>) {
        if let Some(o) = self {
            o.on_tick_end(view);
        }
    }

    fn on_run_end(&mut self, final_tick: Tick, requests: &[Request]) {
        if let Some(o) = self {
            o.on_run_end(final_tick, requests);
        }
    }
}
