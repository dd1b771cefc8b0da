//! Transient feedback for copy-to-clipboard actions.

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock, deadline_after};

/// How long a copy result stays visible.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// What the copy button should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Idle,
    Copied,
    Failed,
}

/// Shows the result of the last copy for a short time, then returns to idle.
///
/// Failures are surfaced the same way as successes instead of being dropped.
#[derive(Debug)]
pub struct CopyIndicator<C: Clock = SystemClock> {
    clock: C,
    visible_for: Duration,
    shown: Option<(CopyStatus, Instant)>,
}

impl<C: Clock> CopyIndicator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            visible_for: DEFAULT_COPY_FEEDBACK,
            shown: None,
        }
    }

    /// Set how long a result stays visible.
    #[must_use]
    pub fn with_visible_for(mut self, duration: Duration) -> Self {
        self.visible_for = duration;
        self
    }

    /// Record the result of a copy attempt and return the status to show.
    pub fn record<E: Display>(&mut self, result: Result<(), E>) -> CopyStatus {
        let status = match result {
            Ok(()) => CopyStatus::Copied,
            Err(e) => {
                tracing::warn!(error = %e, "Copy to clipboard failed");
                CopyStatus::Failed
            }
        };
        self.shown = Some((status, deadline_after(self.clock.now(), self.visible_for)));
        status
    }

    /// Status to show now.
    pub fn status(&mut self) -> CopyStatus {
        match self.shown {
            Some((status, until)) if self.clock.now() < until => status,
            Some(_) => {
                self.shown = None;
                CopyStatus::Idle
            }
            None => CopyStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_idle_initially() {
        let mut indicator = CopyIndicator::new(ManualClock::new());
        assert_eq!(indicator.status(), CopyStatus::Idle);
    }

    #[test]
    fn test_copied_then_idle() {
        let clock = ManualClock::new();
        let mut indicator = CopyIndicator::new(clock.clone());

        assert_eq!(indicator.record::<String>(Ok(())), CopyStatus::Copied);
        clock.advance(Duration::from_millis(1999));
        assert_eq!(indicator.status(), CopyStatus::Copied);

        clock.advance(Duration::from_millis(1));
        assert_eq!(indicator.status(), CopyStatus::Idle);
    }

    #[test]
    fn test_failure_is_shown() {
        let clock = ManualClock::new();
        let mut indicator =
            CopyIndicator::new(clock.clone()).with_visible_for(Duration::from_millis(500));

        assert_eq!(
            indicator.record(Err("clipboard permission denied")),
            CopyStatus::Failed
        );
        assert_eq!(indicator.status(), CopyStatus::Failed);

        clock.advance(Duration::from_millis(500));
        assert_eq!(indicator.status(), CopyStatus::Idle);
    }

    #[test]
    fn test_huge_visible_for_does_not_overflow() {
        let clock = ManualClock::new();
        let mut indicator = CopyIndicator::new(clock.clone()).with_visible_for(Duration::MAX);

        assert_eq!(indicator.record::<&str>(Ok(())), CopyStatus::Copied);
        clock.advance(Duration::from_secs(24 * 60 * 60));
        assert_eq!(indicator.status(), CopyStatus::Copied);
    }

    #[test]
    fn test_new_result_replaces_old() {
        let clock = ManualClock::new();
        let mut indicator = CopyIndicator::new(clock.clone());

        indicator.record(Err("denied"));
        clock.advance(Duration::from_millis(1500));
        indicator.record::<&str>(Ok(()));
        clock.advance(Duration::from_millis(1500));

        assert_eq!(indicator.status(), CopyStatus::Copied);
    }
}
