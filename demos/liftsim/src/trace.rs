//! `--trace`: one line per cabin event on stdout.

use lift_core::{Direction, Floor, Request, RequestId, Tick};
use lift_dispatch::{CabinView, DispatchObserver};

#[derive(Default)]
pub struct TracePrinter {
    last: Option<(Floor, Direction, usize, usize)>,
}

impl DispatchObserver for TracePrinter {
    fn on_direction(&mut self, now: Tick, floor: Floor, direction: Direction) {
        println!("{now:>6} {floor:>4}  heading {direction}");
    }

    fn on_board(&mut self, now: Tick, floor: Floor, id: RequestId, request: &Request) {
        println!("{now:>6} {floor:>4}  {id} boards for {}", request.destination());
    }

    fn on_alight(&mut self, now: Tick, floor: Floor, id: RequestId, request: &Request) {
        let journey = request.journey_ticks().unwrap_or_default();
        println!("{now:>6} {floor:>4}  {id} arrives after {journey} ticks");
    }

    /// Idle ticks that change nothing are not printed.
    fn on_tick_end(&mut self, view: &CabinView<'_>) {
        let state = (view.floor, view.direction, view.waiting.len(), view.riding.len());
        if self.last == Some(state) {
            return;
        }
        self.last = Some(state);
        println!(
            "{:>6} {:>4}  {:<7} waiting={} riding={}",
            view.now, view.floor, view.direction, state.2, state.3
        );
    }
}
