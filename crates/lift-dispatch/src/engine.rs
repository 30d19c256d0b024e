//! The `DispatchEngine` struct and its tick loop.

use log::{debug, info, trace, warn};

use lift_core::{Direction, Floor, Request, RequestId, Tick};
use lift_schedule::ReleaseQueue;

use crate::{
    CabinView, DispatchBuilder, DispatchError, DispatchObserver, DispatchPolicy, DispatchResult,
    Elevator, NearestStop,
};

// ── DispatchEngine ────────────────────────────────────────────────────────────

/// Single-cabin dispatch engine.
///
/// Owns the request arena and addresses requests by [`RequestId`]; the
/// `waiting` and `riding` sets hold handles, never references.  A request is
/// always in exactly one of: not yet visible, `waiting`, `riding`, serviced.
///
/// Create via [`DispatchEngine::new`] or [`DispatchBuilder`].
pub struct DispatchEngine<P: DispatchPolicy = NearestStop> {
    floors:    u32,
    now:       Tick,
    floor:     Floor,
    direction: Direction,
    /// Last direction actually travelled; survives stops.
    heading:   Direction,
    requests:  Vec<Request>,
    release:   ReleaseQueue,
    waiting:   Vec<RequestId>,
    riding:    Vec<RequestId>,
    policy:    P,
}

impl DispatchEngine<NearestStop> {
    /// Validate `requests` against a `floors`-storey building and return an
    /// engine at rest on the ground floor at tick 0.
    pub fn new(floors: u32, requests: Vec<Request>) -> DispatchResult<Self> {
        DispatchBuilder::new(floors, requests).build()
    }
}

impl<P: DispatchPolicy> DispatchEngine<P> {
    /// Called by [`DispatchBuilder::build`] after validation.
    pub(crate) fn from_parts(floors: u32, requests: Vec<Request>, policy: P) -> Self {
        let release = ReleaseQueue::build_from_requests(&requests);
        Self {
            floors,
            now:       Tick::ZERO,
            floor:     Floor::GROUND,
            direction: Direction::Stopped,
            heading:   Direction::Stopped,
            requests,
            release,
            waiting:   Vec::new(),
            riding:    Vec::new(),
            policy,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn floors(&self) -> u32 {
        self.floors
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Hand the request records back to the caller for reporting.
    pub fn into_requests(self) -> Vec<Request> {
        self.requests
    }

    /// Read-only snapshot for policies and observers.
    pub fn view(&self) -> CabinView<'_> {
        CabinView {
            now:       self.now,
            floor:     self.floor,
            floors:    self.floors,
            direction: self.direction,
            heading:   self.heading,
            requests:  &self.requests,
            waiting:   &self.waiting,
            riding:    &self.riding,
        }
    }

    #[inline]
    fn top_floor(&self) -> Floor {
        Floor(self.floors)
    }

    // ── Ingest ────────────────────────────────────────────────────────────

    /// Make requests due at `now` visible, then, if the cabin is at rest,
    /// board everyone waiting on its floor.
    ///
    /// Ingest runs several times per tick value (before a move, after it,
    /// after a dwell); a request already waiting or boarded is never queued
    /// twice.
    fn ingest<O: DispatchObserver>(&mut self, observer: &mut O) {
        for id in self.release.due(self.now).to_vec() {
            let request = &self.requests[id.index()];
            if request.is_serviced() || request.is_boarded() || self.waiting.contains(&id) {
                continue;
            }
            trace!("{}: {id} waiting at {} for {}", self.now, request.origin(), request.destination());
            self.waiting.push(id);
        }

        if !self.direction.is_moving() {
            self.board_waiting_here(observer);
        }
    }

    // ── Passenger exchange ────────────────────────────────────────────────

    fn board<O: DispatchObserver>(&mut self, id: RequestId, observer: &mut O) {
        let request = &mut self.requests[id.index()];
        request.mark_boarded(self.now);
        debug!("{}: {id} boards at {} for {}", self.now, self.floor, request.destination());
        self.riding.push(id);
        observer.on_board(self.now, self.floor, id, &self.requests[id.index()]);
    }

    /// Move every waiter whose origin is the current floor into the cabin.
    /// Returns `true` if anyone boarded.
    fn board_waiting_here<O: DispatchObserver>(&mut self, observer: &mut O) -> bool {
        let floor = self.floor;
        let requests = &self.requests;
        let (boarding, still_waiting): (Vec<RequestId>, Vec<RequestId>) =
            std::mem::take(&mut self.waiting)
                .into_iter()
                .partition(|id| requests[id.index()].origin() == floor);
        self.waiting = still_waiting;

        let boarded = !boarding.is_empty();
        for id in boarding {
            self.board(id, observer);
        }
        boarded
    }

    /// Drop off riders bound for this floor, then board waiters on it.
    /// Returns `true` if the cabin exchanged anyone (a required stop).
    fn resolve<O: DispatchObserver>(&mut self, observer: &mut O) -> bool {
        let floor = self.floor;
        let requests = &self.requests;
        let (alighting, staying): (Vec<RequestId>, Vec<RequestId>) =
            std::mem::take(&mut self.riding)
                .into_iter()
                .partition(|id| requests[id.index()].destination() == floor);
        self.riding = staying;

        let alighted = !alighting.is_empty();
        for id in alighting {
            let request = &mut self.requests[id.index()];
            if request.mark_serviced(self.now) {
                debug!("{}: {id} arrives at {}", self.now, floor);
                observer.on_alight(self.now, floor, id, &self.requests[id.index()]);
            }
        }

        let boarded = self.board_waiting_here(observer);
        alighted || boarded
    }

    // ── Movement ──────────────────────────────────────────────────────────

    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        if direction.is_moving() {
            self.heading = direction;
        }
    }

    /// `true` if one more floor in `direction` stays inside the building.
    fn can_step(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up      => self.floor < self.top_floor(),
            Direction::Down    => self.floor > Floor::GROUND,
            Direction::Stopped => false,
        }
    }

    /// One floor of travel in the committed direction, with ingest, passenger
    /// resolution and the door dwell.  Leaves `direction` untouched.
    fn advance_one_floor<O: DispatchObserver>(&mut self, observer: &mut O) {
        self.floor = self.floor.step(self.direction);
        self.now = self.now.next();
        self.ingest(observer);

        if self.resolve(observer) {
            self.now = self.now.next();
            self.ingest(observer);
        }
    }

    /// A full Move: advance one floor, then decide whether to keep going.
    fn step<O: DispatchObserver>(&mut self, observer: &mut O) {
        let direction = self.direction;
        self.advance_one_floor(observer);

        if !self.policy.keep_going(&self.view(), direction) {
            self.set_direction(Direction::Stopped);
        }
        if (self.floor == self.top_floor() && direction == Direction::Up)
            || (self.floor == Floor::GROUND && direction == Direction::Down)
        {
            self.set_direction(Direction::Stopped);
        }
    }

    /// Ask the policy for a direction.  A choice that would leave the
    /// building is discarded.
    fn decide<O: DispatchObserver>(&mut self, observer: &mut O) {
        let choice = self.policy.select_direction(&self.view());
        if !choice.is_moving() {
            return;
        }
        if !self.can_step(choice) {
            warn!("{}: policy chose {choice} at {}; staying put", self.now, self.floor);
            return;
        }
        debug!("{}: heading {choice} from {}", self.now, self.floor);
        self.set_direction(choice);
        observer.on_direction(self.now, self.floor, choice);
    }

    /// One iteration of the run loop.
    fn tick<O: DispatchObserver>(&mut self, observer: &mut O) {
        self.ingest(observer);

        if !self.direction.is_moving() && !self.view().is_idle() {
            self.decide(observer);
        }

        if self.direction.is_moving() {
            self.step(observer);
        } else {
            self.now = self.now.next();
        }

        trace!(
            "{}: {} {} waiting={} riding={}",
            self.now, self.floor, self.direction, self.waiting.len(), self.riding.len()
        );
        observer.on_tick_end(&self.view());
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

impl<P: DispatchPolicy> Elevator for DispatchEngine<P> {
    fn run_with<O: DispatchObserver>(&mut self, total_ticks: u64, observer: &mut O) {
        let end = Tick(total_ticks);
        info!(
            "running {} requests on {} floors from {} to {end}",
            self.requests.len(), self.floors, self.now
        );

        while self.now < end {
            self.tick(observer);
        }

        info!(
            "stopped at {} on {}: {} waiting, {} riding",
            self.now, self.floor, self.waiting.len(), self.riding.len()
        );
        observer.on_run_end(self.now, &self.requests);
    }

    fn move_to_floor_with<O: DispatchObserver>(
        &mut self,
        target:   Floor,
        observer: &mut O,
    ) -> DispatchResult<()> {
        if !target.within(self.floors) {
            return Err(DispatchError::TargetOutOfRange { floor: target, floors: self.floors });
        }

        debug!("{}: moving directly from {} to {target}", self.now, self.floor);
        self.ingest(observer);
        while self.floor != target {
            let direction = Direction::toward(self.floor, target);
            if self.direction != direction {
                self.set_direction(direction);
                observer.on_direction(self.now, self.floor, direction);
            }
            self.advance_one_floor(observer);
            observer.on_tick_end(&self.view());
        }

        self.set_direction(Direction::Stopped);
        self.board_waiting_here(observer);
        Ok(())
    }

    fn current_floor(&self) -> Floor {
        self.floor
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn now(&self) -> Tick {
        self.now
    }

    fn riding(&self) -> &[RequestId] {
        &self.riding
    }

    fn waiting(&self) -> &[RequestId] {
        &self.waiting
    }

    fn requests(&self) -> &[Request] {
        &self.requests
    }
}
