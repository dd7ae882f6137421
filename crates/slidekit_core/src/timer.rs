//! Deferred task scheduling
//!
//! Engines never sleep or spawn. Every deferred mutation (a transition
//! settling, an autoplay tick) is a scheduled entry with a cancellation
//! handle. The host advances time, engines pop whatever came due and apply it.
//!
//! `TimerQueue` keeps a virtual clock measured from mount, which makes every
//! engine fully deterministic under test. Hosts with their own event loop can
//! implement `TimerService` on top of it instead.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

/// What a timer does when it fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerTask {
    /// Commit the pending target index once its transition has elapsed
    Settle,
    /// Advance to the next slide
    Autoplay,
}

/// Schedule-after-delay and cancel, driven by an external clock
pub trait TimerService {
    /// Current time, measured from when the service was created
    fn now(&self) -> Duration;

    /// Schedule `task` to fire `delay` from now
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId;

    /// Cancel a pending timer
    ///
    /// Returns false if the timer already fired or was cancelled.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Check whether a timer is still pending
    fn is_pending(&self, id: TimerId) -> bool;

    /// Number of timers still pending
    fn pending_count(&self) -> usize;

    /// Remove the earliest timer whose deadline is at or before `until`
    ///
    /// The clock moves forward to that timer's deadline, so anything scheduled
    /// while handling it is timed from the moment it fired.
    fn pop_due(&mut self, until: Duration) -> Option<(TimerId, TimerTask)>;

    /// Move the clock forward to `until` without firing anything
    fn advance_clock(&mut self, until: Duration);
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    deadline: Duration,
    /// Tie-breaker so equal deadlines fire in scheduling order
    seq: u64,
    task: TimerTask,
}

/// Deterministic timer service backed by a virtual clock
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: SlotMap<TimerId, Scheduled>,
    now: Duration,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deadline of a pending timer
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.entries.get(id).map(|entry| entry.deadline)
    }

    /// Time remaining until a pending timer fires
    pub fn remaining(&self, id: TimerId) -> Option<Duration> {
        self.deadline(id)
            .map(|deadline| deadline.saturating_sub(self.now))
    }
}

impl TimerService for TimerQueue {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;

        let deadline = self.now + delay;
        let id = self.entries.insert(Scheduled {
            deadline,
            seq,
            task,
        });

        tracing::trace!(
            "timer scheduled: {:?} in {}ms (deadline {}ms)",
            task,
            delay.as_millis(),
            deadline.as_millis()
        );
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.entries.remove(id).is_some()
    }

    fn is_pending(&self, id: TimerId) -> bool {
        self.entries.contains_key(id)
    }

    fn pending_count(&self) -> usize {
        self.entries.len()
    }

    fn pop_due(&mut self, until: Duration) -> Option<(TimerId, TimerTask)> {
        let (id, entry) = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.deadline <= until)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
            .map(|(id, entry)| (id, *entry))?;

        self.entries.remove(id);
        if entry.deadline > self.now {
            self.now = entry.deadline;
        }
        Some((id, entry.task))
    }

    fn advance_clock(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }
}
