//! Virtual real-time timers.
//!
//! A timer only accumulates time that the owner explicitly feeds it, so a
//! timer that has been dropped can never fire. Cancelling means dropping.

use std::time::Duration;

/// Smallest period a timer will accept; keeps the scheduler making progress.
const MIN_PERIOD: Duration = Duration::from_micros(1);

/// Periodic timer driven by explicit time steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    period: Duration,
    /// Time accumulated toward the next firing.
    elapsed: Duration,
    suspended: bool,
}

impl Timer {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            elapsed: Duration::ZERO,
            suspended: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time until the next firing, or `None` while suspended.
    pub fn until_due(&self) -> Option<Duration> {
        if self.suspended {
            None
        } else {
            Some(self.period.saturating_sub(self.elapsed))
        }
    }

    /// Feed `step` of real time. Returns true when the timer fires.
    ///
    /// Callers step at most up to `until_due`, so a single call fires at
    /// most once; any overshoot carries into the next period.
    pub fn accumulate(&mut self, step: Duration) -> bool {
        if self.suspended {
            return false;
        }
        self.elapsed += step;
        if self.elapsed >= self.period {
            self.elapsed -= self.period;
            true
        } else {
            false
        }
    }

    /// Stop accumulating, keeping progress toward the next firing.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = Timer::new(Duration::from_millis(100));
        assert!(!timer.accumulate(Duration::from_millis(60)));
        assert_eq!(timer.until_due(), Some(Duration::from_millis(40)));
        assert!(timer.accumulate(Duration::from_millis(40)));
        assert_eq!(timer.until_due(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_suspend_keeps_progress() {
        let mut timer = Timer::new(Duration::from_millis(100));
        timer.accumulate(Duration::from_millis(70));
        timer.suspend();
        assert_eq!(timer.until_due(), None);
        assert!(!timer.accumulate(Duration::from_secs(5)));
        timer.resume();
        assert_eq!(timer.until_due(), Some(Duration::from_millis(30)));
        assert!(timer.accumulate(Duration::from_millis(30)));
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let timer = Timer::new(Duration::ZERO);
        assert_eq!(timer.period(), MIN_PERIOD);
    }
}
