//! Frame time sources.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Instant;

/// Supplies monotonic frame times in milliseconds.
pub trait AnimationClock {
    fn now_millis(&self) -> u64;
}

/// Wall clock measured from the moment the clock was created.
#[derive(Clone, Copy, Debug)]
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

impl AnimationClock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock advanced by hand. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, millis: u64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get().saturating_add(millis));
    }
}

impl AnimationClock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.millis.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(16);
        handle.advance(16);
        assert_eq!(clock.now_millis(), 32);
        clock.set(5);
        assert_eq!(handle.now_millis(), 5);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now_millis();
        assert!(clock.now_millis() >= first);
    }
}
