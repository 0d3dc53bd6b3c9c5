use std::time::{Duration, Instant};

/// Fixed-interval frame deadlines.
///
/// A frame that overruns its slot pushes the next deadline to the moment it
/// finished instead of letting the loop burst to catch up.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    interval: Duration,
    next_deadline: Instant,
}

impl FramePacer {
    /// The first deadline is `start` itself, so the first frame is immediate.
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_deadline: start,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.next_deadline
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedules the next frame after one finished at `now`.
    pub fn advance(&mut self, now: Instant) {
        let next = self.next_deadline + self.interval;
        self.next_deadline = next.max(now);
    }
}
