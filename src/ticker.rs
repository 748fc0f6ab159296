use std::time::{Duration, Instant};

/// A repeating deadline that the application loop waits on.
///
/// At most one deadline is armed at a time: starting an armed ticker
/// replaces its deadline, and cancelling is idempotent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new(period: Duration) -> Ticker {
        Ticker { period, next: None }
    }

    /// Arm the ticker so that it first fires one period after `now`
    pub(crate) fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub(crate) fn cancel(&mut self) {
        self.next = None;
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.next.is_some()
    }

    /// Return how long until the ticker is due, zero if it is overdue, or
    /// `None` if it is not armed
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next.map(|when| when.saturating_duration_since(now))
    }

    /// Record that the ticker fired at `now` and schedule the next deadline
    /// one period after the one just reached.  If the loop has fallen more
    /// than a period behind, the next deadline is instead measured from
    /// `now`, so that missed ticks are dropped rather than run in a burst.
    pub(crate) fn fire(&mut self, now: Instant) {
        if let Some(when) = self.next {
            let next = when + self.period;
            self.next = Some(if next > now { next } else { now + self.period });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn idle_ticker() {
        let mut ticker = Ticker::new(PERIOD);
        let now = Instant::now();
        assert!(!ticker.is_active());
        assert_eq!(ticker.remaining(now), None);
        ticker.fire(now);
        assert!(!ticker.is_active());
    }

    #[test]
    fn start_and_fire() {
        let mut ticker = Ticker::new(PERIOD);
        let t0 = Instant::now();
        ticker.start(t0);
        assert!(ticker.is_active());
        assert_eq!(ticker.remaining(t0), Some(PERIOD));
        assert_eq!(
            ticker.remaining(t0 + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
        assert_eq!(ticker.remaining(t0 + PERIOD * 2), Some(Duration::ZERO));
        ticker.fire(t0 + Duration::from_millis(105));
        assert_eq!(ticker.remaining(t0 + PERIOD), Some(PERIOD));
    }

    #[test]
    fn fire_after_falling_behind() {
        let mut ticker = Ticker::new(PERIOD);
        let t0 = Instant::now();
        ticker.start(t0);
        let late = t0 + Duration::from_millis(350);
        ticker.fire(late);
        assert_eq!(ticker.remaining(late), Some(PERIOD));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut ticker = Ticker::new(PERIOD);
        let t0 = Instant::now();
        ticker.start(t0);
        ticker.cancel();
        ticker.cancel();
        assert!(!ticker.is_active());
        ticker.start(t0);
        ticker.start(t0 + PERIOD);
        assert_eq!(ticker.remaining(t0 + PERIOD), Some(PERIOD));
    }
}
