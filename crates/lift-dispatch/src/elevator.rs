//! The `Elevator` trait: what any cabin controller offers its drivers.

use lift_core::{Direction, Floor, Request, RequestId, Tick};

use crate::{DispatchObserver, DispatchResult, NoopObserver};

/// A simulated cabin that can be run over logical ticks and inspected.
///
/// Harnesses written against `Elevator` work with every policy the engine is
/// instantiated with, which is how alternate dispatch strategies are compared
/// on the same request lists.
pub trait Elevator {
    /// Advance until the clock reaches `total_ticks`, reporting to
    /// `observer`.
    ///
    /// A door dwell on the final move may carry the clock one tick past the
    /// bound.  Calling again with a larger bound resumes the run.
    fn run_with<O: DispatchObserver>(&mut self, total_ticks: u64, observer: &mut O);

    /// Drive the cabin straight to `target`, one floor per tick, exchanging
    /// passengers at every floor on the way.  The cabin ends at rest.
    fn move_to_floor_with<O: DispatchObserver>(
        &mut self,
        target:   Floor,
        observer: &mut O,
    ) -> DispatchResult<()>;

    fn current_floor(&self) -> Floor;

    fn direction(&self) -> Direction;

    fn now(&self) -> Tick;

    /// Boarded requests awaiting drop-off.
    fn riding(&self) -> &[RequestId];

    /// Visible requests that have not boarded.
    fn waiting(&self) -> &[RequestId];

    /// Every request, indexed by `RequestId`.
    fn requests(&self) -> &[Request];

    /// [`run_with`][Self::run_with] without callbacks.
    fn run(&mut self, total_ticks: u64) {
        self.run_with(total_ticks, &mut NoopObserver);
    }

    /// [`move_to_floor_with`][Self::move_to_floor_with] without callbacks.
    fn move_to_floor(&mut self, target: Floor) -> DispatchResult<()> {
        self.move_to_floor_with(target, &mut NoopObserver)
    }
}
