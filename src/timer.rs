use std::time::{Duration, Instant};

pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Recurring one-second schedule owned by a session.
///
/// Deadline based: the event loop reports the current instant and the clock
/// answers how many ticks have come due since it last asked. Cancelling drops
/// the deadline, after which nothing is ever due again.
#[derive(Debug, Clone, Default)]
pub struct SampleClock {
    next_due: Option<Instant>,
}

impl SampleClock {
    pub fn new() -> Self {
        Self { next_due: None }
    }

    /// Schedule the first tick one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + SAMPLE_INTERVAL);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Consume every tick due at or before `now` and return how many fired.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += SAMPLE_INTERVAL;
        }
        self.next_due = Some(due);

        fired
    }
}
