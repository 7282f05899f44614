use std::time::{Duration, Instant};

/// Fixed-interval tick source for the main loop.
///
/// `poll` reports at most one due tick per call, so a stalled caller (slow
/// render, long input wait) gets the missed fires dropped rather than
/// delivered as a burst, and two ticks can never overlap.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
    next_due: Instant,
}

impl TickScheduler {
    /// Creates a scheduler whose first tick is due one interval from now.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    /// Creates a scheduler anchored at an explicit instant.
    #[must_use]
    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns true when a tick is due, consuming it.
    ///
    /// Re-arms relative to `now`, not the old due time, so time spent
    /// stalled is discarded instead of replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }

        self.next_due = now + self.interval;
        true
    }

    /// Discards any pending tick and re-arms the schedule.
    ///
    /// Called on restart so a due time armed for the previous game can
    /// never advance the fresh instance.
    pub fn restart(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }

    /// Returns the configured tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickScheduler;

    const INTERVAL: Duration = Duration::from_millis(200);

    #[test]
    fn tick_is_not_due_before_one_interval() {
        let base = Instant::now();
        let mut scheduler = TickScheduler::starting_at(INTERVAL, base);

        assert!(!scheduler.poll(base));
        assert!(!scheduler.poll(base + Duration::from_millis(199)));
        assert!(scheduler.poll(base + INTERVAL));
    }

    #[test]
    fn consecutive_polls_fire_once_per_interval() {
        let base = Instant::now();
        let mut scheduler = TickScheduler::starting_at(INTERVAL, base);

        assert!(scheduler.poll(base + INTERVAL));
        // Immediately after firing, nothing is due.
        assert!(!scheduler.poll(base + INTERVAL));
        assert!(!scheduler.poll(base + INTERVAL + Duration::from_millis(100)));
        assert!(scheduler.poll(base + INTERVAL + INTERVAL));
    }

    #[test]
    fn missed_intervals_collapse_into_one_tick() {
        let base = Instant::now();
        let mut scheduler = TickScheduler::starting_at(INTERVAL, base);

        // Caller stalls for five intervals: one tick, not five.
        let late = base + INTERVAL * 5;
        assert!(scheduler.poll(late));
        assert!(!scheduler.poll(late));
        assert!(!scheduler.poll(late + Duration::from_millis(199)));
        assert!(scheduler.poll(late + INTERVAL));
    }

    #[test]
    fn restart_discards_a_pending_tick() {
        let base = Instant::now();
        let mut scheduler = TickScheduler::starting_at(INTERVAL, base);

        // A tick is pending, but restart re-arms before it is polled.
        let pending = base + INTERVAL;
        scheduler.restart(pending);

        assert!(!scheduler.poll(pending));
        assert!(scheduler.poll(pending + INTERVAL));
    }
}
