//! Run configuration.

use std::fmt;
use std::str::FromStr;

use crate::{LiftError, LiftResult, Tick};

// ── PolicyKind ────────────────────────────────────────────────────────────────

/// Which direction-selection policy the driver should build the engine with.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PolicyKind {
    /// Shortest next stop, ties broken upward.
    #[default]
    Nearest,
    /// Keep sweeping in the last direction while demand remains ahead.
    Sweep,
}

impl FromStr for PolicyKind {
    type Err = LiftError;

    fn from_str(s: &str) -> LiftResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(PolicyKind::Nearest),
            "sweep" | "scan" => Ok(PolicyKind::Sweep),
            other => Err(LiftError::Parse(format!(
                "unknown policy {other:?}: expected \"nearest\" or \"sweep\""
            ))),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Nearest => f.write_str("nearest"),
            PolicyKind::Sweep   => f.write_str("sweep"),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically assembled by the driver from a TOML file and command-line flags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Must be at least 1.
    pub floors: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Seed for generated passenger lists.  The same seed always produces
    /// identical requests.
    pub seed: u64,

    /// Direction-selection policy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: PolicyKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floors:      10,
            total_ticks: 100,
            seed:        42,
            policy:      PolicyKind::Nearest,
        }
    }
}

impl SimConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floors == 0 {
            return Err(LiftError::Config("a building needs at least one floor".into()));
        }
        Ok(())
    }
}
