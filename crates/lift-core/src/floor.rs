//! Floors and travel direction.
//!
//! Floors are 1-based: the ground floor is `Floor(1)` and a building with
//! `n` floors spans `Floor(1)..=Floor(n)`.

use std::fmt;

use crate::{LiftError, LiftResult};

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A 1-based floor number.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The bottom floor of every building.  The cabin starts here.
    pub const GROUND: Floor = Floor(1);

    /// Checked constructor: rejects floor 0.
    pub fn new(n: u32) -> LiftResult<Floor> {
        if n == 0 {
            return Err(LiftError::InvalidFloor(n));
        }
        Ok(Floor(n))
    }

    /// Absolute number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The adjacent floor in `direction`.  `Stopped` returns `self`.
    ///
    /// Callers are responsible for not stepping below the ground floor.
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        match direction {
            Direction::Up      => Floor(self.0 + 1),
            Direction::Down    => Floor(self.0 - 1),
            Direction::Stopped => self,
        }
    }

    /// `true` if `self` lies in [1, `floors`].
    #[inline]
    pub fn within(self, floors: u32) -> bool {
        (1..=floors).contains(&self.0)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("F{}", self.0))
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Cabin travel direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Stopped,
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `from` to `to`: `Up` if `to` is strictly
    /// above, `Down` otherwise.
    ///
    /// Equal floors map to `Down`, matching the nearest-stop heuristic which
    /// only calls this with a non-zero delta.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }

    /// `true` if `target` is strictly beyond `cabin` when travelling in
    /// `self`.  Always `false` for `Stopped`.
    #[inline]
    pub fn is_ahead(self, cabin: Floor, target: Floor) -> bool {
        match self {
            Direction::Up      => target > cabin,
            Direction::Down    => target < cabin,
            Direction::Stopped => false,
        }
    }

    /// The opposite direction.  `Stopped` stays `Stopped`.
    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up      => Direction::Down,
            Direction::Down    => Direction::Up,
            Direction::Stopped => Direction::Stopped,
        }
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        self != Direction::Stopped
    }

    /// Lower-case label used in logs and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Stopped => "stopped",
            Direction::Up      => "up",
            Direction::Down    => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
