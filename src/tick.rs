use std::time::{Duration, Instant};

/// Decides when the next generation is due. Missed ticks are not caught up.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    last_update: Instant,
}

impl TickClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last_update: now }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true at most once per elapsed interval, restarting the interval at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_update) >= self.interval {
            self.last_update = now;
            true
        } else {
            false
        }
    }
}
