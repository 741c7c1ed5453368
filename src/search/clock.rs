//! Time budget for one move decision
//!
//! The budget is an allowance plus a clock that is only ever read. Search
//! nodes sample it on entry; nothing resets it mid-search.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of elapsed time since the move decision started.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}

/// Monotonic wall clock started at construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for Stopwatch {
    #[inline]
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Simulated clock for tests: each read returns the current time and then
/// advances it by `step`.
///
/// A search samples the clock once per node, so a stepping clock turns a
/// time allowance into a node allowance and makes timeouts reproducible.
#[derive(Debug)]
pub struct SteppingClock {
    now: Cell<Duration>,
    step: Duration,
    reads: Cell<u64>,
}

impl SteppingClock {
    #[must_use]
    pub fn new(step: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step,
            reads: Cell::new(0),
        }
    }

    /// A clock that never advances.
    #[must_use]
    pub fn frozen() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Number of times the clock has been read
    pub fn reads(&self) -> u64 {
        self.reads.get()
    }
}

impl Clock for SteppingClock {
    fn elapsed(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.step);
        self.reads.set(self.reads.get() + 1);
        now
    }
}

/// Per-move time allowance.
#[derive(Debug)]
pub struct SearchBudget<C: Clock = Stopwatch> {
    clock: C,
    allowance: Duration,
}

impl SearchBudget<Stopwatch> {
    /// Start the wall clock now.
    #[must_use]
    pub fn start(allowance: Duration) -> Self {
        Self::with_clock(Stopwatch::start(), allowance)
    }

    /// A budget that never runs out.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::start(Duration::MAX)
    }
}

impl<C: Clock> SearchBudget<C> {
    #[must_use]
    pub fn with_clock(clock: C, allowance: Duration) -> Self {
        Self { clock, allowance }
    }

    #[inline]
    pub fn allowance(&self) -> Duration {
        self.allowance
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// True once elapsed time is strictly past the allowance.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.clock.elapsed() > self.allowance
    }
}
