//! The simulation clock.

use std::fmt;

/// Monotonically increasing simulation clock, one tick per agent move.
///
/// The clock is never hidden global state: every time-dependent query
/// (dynamic-obstacle occupancy, planning calls) takes the tick explicitly,
/// keeping planners pure and testable in isolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tick(pub u64);

impl Tick {
    /// Tick zero, the start of every run.
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// The tick `steps` moves later.
    ///
    /// A path step `k` (1-based) of a plan made at tick `now` arrives at
    /// `now.plus(k)`.
    pub fn plus(self, steps: u64) -> Tick {
        Tick(self.0 + steps)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Tick {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
