//! Direction policies, the pluggable part of the dispatch decision.
//!
//! The engine owns movement, boarding and tick accounting.  A policy only
//! answers two questions:
//!
//! 1. the cabin is stopped with outstanding demand: which way now?
//! 2. the cabin just moved: keep going in the same direction?
//!
//! Both are pure functions of a [`CabinView`], so swapping policies never
//! changes how a single move is executed.

use lift_core::{Direction, Floor};

use crate::CabinView;

/// Pluggable direction selection.
///
/// Only [`select_direction`][Self::select_direction] is required.  The
/// default continuation check keeps the cabin moving while any rider's
/// destination or any waiter's origin lies strictly ahead, so a committed
/// cabin never reverses with demand still in front of it.
pub trait DispatchPolicy {
    /// Called when the cabin is stopped and someone is waiting or riding.
    /// Every target in `view` is on another floor: waiters on the cabin's
    /// floor have already boarded.
    ///
    /// Return `Direction::Stopped` to spend the tick idle.
    fn select_direction(&self, view: &CabinView<'_>) -> Direction;

    /// Called after every move in `direction`.  Returning `false` stops the
    /// cabin so that the next tick re-runs direction selection.
    fn keep_going(&self, view: &CabinView<'_>, direction: Direction) -> bool {
        view.demand_ahead(direction)
    }
}

// ── NearestStop ───────────────────────────────────────────────────────────────

/// Shortest-next-stop heuristic.
///
/// Scans riders' destinations then waiters' origins, picks the target
/// closest to the cabin, and breaks distance ties in favour of a target
/// strictly above the cabin.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestStop;

impl NearestStop {
    /// The nearest outstanding target, ties going up.
    ///
    /// Targets on the cabin's own floor are skipped.  The engine never hands
    /// a policy such a target: a stopped cabin boards everyone waiting on its
    /// floor during ingest, and riders bound for it alighted on arrival.  The
    /// filter only matters for views built outside the engine.
    pub fn nearest_target(view: &CabinView<'_>) -> Option<Floor> {
        let mut best: Option<(u32, Floor)> = None;
        for target in view.targets().filter(|&t| t != view.floor) {
            let distance = target.distance(view.floor);
            let better = match best {
                None => true,
                Some((best_distance, _)) => {
                    distance < best_distance
                        || (distance == best_distance && target > view.floor)
                }
            };
            if better {
                best = Some((distance, target));
            }
        }
        best.map(|(_, target)| target)
    }
}

impl DispatchPolicy for NearestStop {
    fn select_direction(&self, view: &CabinView<'_>) -> Direction {
        match Self::nearest_target(view) {
            Some(target) => Direction::toward(view.floor, target),
            None         => Direction::Stopped,
        }
    }
}

// ── SweepPolicy ───────────────────────────────────────────────────────────────

/// Strict sweep (SCAN-style) selection.
///
/// When the cabin stops it resumes its previous heading if there is demand
/// ahead in that direction, otherwise reverses if there is demand behind.
/// Only a cabin that has never moved falls back to [`NearestStop`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SweepPolicy;

impl DispatchPolicy for SweepPolicy {
    fn select_direction(&self, view: &CabinView<'_>) -> Direction {
        let heading = view.heading;
        if heading.is_moving() {
            if view.demand_ahead(heading) {
                return heading;
            }
            if view.demand_ahead(heading.reverse()) {
                return heading.reverse();
            }
        }
        NearestStop.select_direction(view)
    }
}
