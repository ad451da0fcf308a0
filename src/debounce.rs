use std::time::{Duration, Instant};

/// Default quiet period between the last keystroke and the search.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Cancellable one-shot timer: every `schedule` pushes the deadline back, and
/// `poll` fires once after the input has been quiet for the whole period.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer relative to `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// `true` exactly once, the first time it is called at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the timer fires, for scheduling the next repaint.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn burst_collapses_into_one_evaluation() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        // Keystrokes every 100 ms keep pushing the deadline back.
        for i in 0..5 {
            let now = start + 100 * i * MS;
            assert!(!debouncer.poll(now));
            debouncer.schedule(now);
        }
        let last = start + 400 * MS;

        assert!(!debouncer.poll(last + 299 * MS));
        assert_eq!(debouncer.remaining(last + 299 * MS), Some(MS));
        assert!(debouncer.poll(last + 300 * MS));
        assert!(!debouncer.poll(last + 301 * MS));
        assert_eq!(debouncer.remaining(last + 301 * MS), None);
    }

    #[test]
    fn cancel_disarms() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(10 * MS);
        debouncer.schedule(now);
        assert!(debouncer.remaining(now).is_some());
        debouncer.cancel();
        assert!(!debouncer.poll(now + 20 * MS));
    }

    #[test]
    fn idle_timer_never_fires() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.poll(Instant::now() + Duration::from_secs(60)));
    }
}
