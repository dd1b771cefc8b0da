//! Time sources for deadline-driven state machines.

use std::time::{Duration, Instant};

/// Longest delay a deadline is scheduled for; longer delays are clamped.
const MAX_DEADLINE_DELAY: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Source of the current time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deadline `delay` after `now`, clamped so it cannot overflow.
pub(crate) fn deadline_after(now: Instant, delay: Duration) -> Instant {
    now.checked_add(delay.min(MAX_DEADLINE_DELAY)).unwrap_or(now)
}

#[cfg(any(test, feature = "mock"))]
mod manual {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use super::Clock;

    /// Clock that only moves when told to.
    ///
    /// Clones share the same time, so a test can keep one handle and give
    /// another to the machine under test.
    #[derive(Clone, Debug)]
    pub struct ManualClock {
        base: Instant,
        elapsed: Arc<Mutex<Duration>>,
    }

    impl ManualClock {
        #[must_use]
        pub fn new() -> Self {
            Self {
                base: Instant::now(),
                elapsed: Arc::new(Mutex::new(Duration::ZERO)),
            }
        }

        /// Move time forward.
        pub fn advance(&self, by: Duration) {
            *self.elapsed.lock().unwrap() += by;
        }
    }

    impl Default for ManualClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + *self.elapsed.lock().unwrap()
        }
    }
}

#[cfg(any(test, feature = "mock"))]
pub use manual::ManualClock;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = other.now();

        clock.advance(Duration::from_millis(250));

        assert_eq!(other.now() - start, Duration::from_millis(250));
    }

    #[test]
    fn test_manual_clock_stands_still() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_deadline_after_clamps_huge_delay() {
        let now = Instant::now();
        assert_eq!(
            deadline_after(now, Duration::from_millis(5)),
            now + Duration::from_millis(5)
        );
        assert_eq!(deadline_after(now, Duration::MAX), now + MAX_DEADLINE_DELAY);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
