//! Time source and periodic tick source for the scheduler.
//!
//! The scheduler never reads wall clock time directly. Hosts pass a [`SystemClock`], tests pass a
//! [`ManualClock`] and move time forward by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Time elapsed since a fixed, arbitrary origin. Never decreases.
    fn now(&self) -> Duration;

    /// Blocks until `now() >= deadline`.
    fn sleep_until(&self, deadline: Duration);
}

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
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep_until(&self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    // Jumps straight to the deadline.
    fn sleep_until(&self, deadline: Duration) {
        if deadline > self.now.get() {
            self.now.set(deadline);
        }
    }
}

/// Fires once per elapsed `period`, counted from the moment it was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    next: Duration,
}

impl Ticker {
    pub fn start(now: Duration, period: Duration) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    /// When the next tick is due.
    pub fn deadline(&self) -> Duration {
        self.next
    }

    /// Consumes one due tick, if any. Call repeatedly to catch up after a long pause.
    pub fn poll(&mut self, now: Duration) -> bool {
        if now < self.next {
            return false;
        }

        self.next += self.period;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(5 * MS);
        assert_eq!(clock.now(), 5 * MS);

        clock.sleep_until(3 * MS);
        assert_eq!(handle.now(), 5 * MS);

        clock.sleep_until(9 * MS);
        assert_eq!(handle.now(), 9 * MS);
    }

    #[test]
    fn ticker_fires_once_per_period() {
        let mut ticker = Ticker::start(Duration::ZERO, 10 * MS);

        assert!(!ticker.poll(9 * MS));
        assert!(ticker.poll(10 * MS));
        assert!(!ticker.poll(10 * MS));
        assert_eq!(ticker.deadline(), 20 * MS);

        // Three periods elapsed at once, three ticks to catch up.
        let mut fired = 0;
        while ticker.poll(45 * MS) {
            fired += 1;
        }
        assert_eq!(fired, 3);
        assert_eq!(ticker.deadline(), 50 * MS);
    }
}
