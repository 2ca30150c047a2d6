use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// A point in simulation time, measured in minutes from the start of the run.
///
/// Wraps an `f64` so fractional minutes survive arithmetic while still providing the total order
/// the event queue requires. Ordering comes from [`f64::total_cmp`], which handles every bit
/// pattern consistently; in exchange, a `NaN` would quietly sort last instead of panicking, so
/// code that computes execution times is expected to keep them finite.
#[derive(Debug, Default, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

impl Minutes {
    /// Time zero, the start of every run.
    pub const ZERO: Minutes = Minutes(0.0);
}

impl PartialEq for Minutes {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Minutes {}

impl PartialOrd for Minutes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Minutes {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Advance a point in time by a duration in minutes.
impl Add<f64> for Minutes {
    type Output = Minutes;

    fn add(self, delay_min: f64) -> Minutes {
        Minutes(self.0 + delay_min)
    }
}

/// The duration in minutes separating two points in time.
impl Sub for Minutes {
    type Output = f64;

    fn sub(self, earlier: Minutes) -> f64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} min", self.0)
    }
}
