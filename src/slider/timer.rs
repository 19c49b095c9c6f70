//! Cancellable one-shot timers on a virtual clock.
//!
//! The slider runs on a single-threaded event loop, so timers are not
//! threads or futures: the host advances the clock by the elapsed time and
//! collects the timers that came due. Tests advance the clock by exact
//! amounts instead of sleeping.

use std::time::Duration;

/// Identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    id: TimerId,
    deadline: Duration,
}

/// One-shot timer queue driven by [`TimerQueue::advance`].
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer firing `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            deadline: self.now + delay,
        });
        id
    }

    /// Cancel a pending timer.
    ///
    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        self.pending.len() != before
    }

    /// Cancel every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Time remaining until the earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|timer| timer.deadline.saturating_sub(self.now))
            .min()
    }

    /// Advance the clock by `elapsed` and return the timers that came due,
    /// earliest deadline first.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        self.now += elapsed;
        let now = self.now;

        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|timer| {
            if timer.deadline <= now {
                due.push(*timer);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|timer| (timer.deadline, timer.id));
        due.into_iter().map(|timer| timer.id).collect()
    }
}
