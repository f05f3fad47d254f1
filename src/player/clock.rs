//! Wall-clock sources for position queries.
//!
//! Transitions and position queries take `now` explicitly; a `Clock` is
//! how callers obtain it.

use std::cell::Cell;
use std::time::Instant;

/// A source of wall-clock time in seconds.
pub trait Clock {
    /// Current time in seconds.
    fn now(&self) -> f64;
}

/// Seconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to.
///
/// Used for scripted replay and tests.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    time: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            time: Cell::new(start),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, time: f64) {
        self.time.set(time);
    }

    /// Move forward by `seconds`.
    pub fn advance(&self, seconds: f64) {
        self.time.set(self.time.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time.get()
    }
}
