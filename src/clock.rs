// Monotonic time source for the debounce logic.
// The session never reads the wall clock directly; it asks a `Clock`, so tests
// can drive time forward tick by tick instead of sleeping.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Time elapsed since some fixed origin. Monotonic, never goes backward.
    fn now(&self) -> Duration;
}

/// Production clock: elapsed time since the session was created.
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Hand-cranked clock for tests; all clones share the same current time.
#[cfg(test)]
#[derive(Clone)]
pub struct ManualClock {
    now: std::rc::Rc<std::cell::Cell<Duration>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self { now: std::rc::Rc::new(std::cell::Cell::new(Duration::ZERO)) }
    }

    pub fn set(&self, t: Duration) {
        self.now.set(t);
    }

    pub fn advance(&self, d: Duration) {
        self.now.set(self.now.get() + d);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
