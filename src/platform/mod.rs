//! Host-side tick pacing
//!
//! The simulation advances one fixed step per tick. The host throttles ticks
//! to the target rate by wall clock; a late tick is not made up for, so a host
//! that falls behind simply runs the simulation slower.

use std::time::{Duration, Instant};

/// Fixed-period throttle for the host loop
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    next: Instant,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// Time left until the next tick is due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Advance the deadline by one period. A missed deadline restarts from
    /// `now` instead of queueing catch-up ticks.
    pub fn advance(&mut self, now: Instant) {
        self.next = self.next.max(now) + self.period;
    }

    /// Sleep until the next tick is due, then schedule the one after
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_catch_up_after_stall() {
        let period = Duration::from_millis(10);
        let mut clock = TickClock::new(period);
        let start = Instant::now();

        // Simulate a 100ms stall
        let late = start + Duration::from_millis(100);
        clock.advance(late);
        assert_eq!(clock.remaining(late), period);
    }

    #[test]
    fn test_on_time_advance_keeps_cadence() {
        let period = Duration::from_millis(10);
        let mut clock = TickClock::new(period);
        let deadline = clock.next;
        clock.advance(deadline - Duration::from_millis(5));
        assert_eq!(clock.next, deadline + period);
    }

    #[test]
    fn test_wait_sleeps_roughly_one_period() {
        let mut clock = TickClock::new(Duration::from_millis(5));
        let start = Instant::now();
        clock.wait();
        assert!(start.elapsed() >= Duration::from_millis(4));
    }
}
