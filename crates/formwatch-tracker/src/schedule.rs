//! Debounce scheduling.
//!
//! The tracker never touches an event-loop primitive directly. It asks a
//! [`Scheduler`] for a cancellable deferred task and remembers only the
//! latest handle; every new trigger cancels the previous one, so the last
//! state before the window elapses is always the one diffed.

use std::time::Duration;

/// Cancellable deferred-task facility provided by the host environment.
pub trait Scheduler {
    /// Opaque handle identifying one scheduled task.
    type Handle: Copy + PartialEq;

    /// Schedule a task to fire after `delay`.
    fn schedule(&mut self, delay: Duration) -> Self::Handle;

    /// Cancel a previously scheduled task. Cancelling an already-fired
    /// handle is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Collapses rapid triggers into a single scheduled recomputation.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    /// Debouncer over the given scheduler and delay window.
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: None,
        }
    }

    /// Cancel any pending task and schedule a fresh one a full window out.
    pub fn trigger(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.pending = Some(self.scheduler.schedule(self.delay));
    }

    /// Acknowledge a fired handle. Returns `true` only when it is the
    /// currently pending one; stale handles are ignored.
    pub fn acknowledge(&mut self, handle: S::Handle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancel the pending task, if any.
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Whether a recomputation is currently scheduled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Access the underlying scheduler.
    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

/// Scheduler for hosts (and tests) that pump timers by hand.
///
/// Handles are monotonically increasing counters; the embedder drains due
/// handles with [`ManualScheduler::fire_next`] and feeds them back to the
/// tracker.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_handle: u64,
    pending: Vec<(u64, Duration)>,
    scheduled_total: u64,
}

impl ManualScheduler {
    /// Fresh scheduler with no pending tasks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the earliest still-pending handle.
    pub fn fire_next(&mut self) -> Option<u64> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0).0)
        }
    }

    /// Number of tasks currently pending.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Total number of schedule calls ever made.
    #[must_use]
    pub const fn scheduled_total(&self) -> u64 {
        self.scheduled_total
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&mut self, delay: Duration) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.scheduled_total += 1;
        self.pending.push((handle, delay));
        handle
    }

    fn cancel(&mut self, handle: u64) {
        self.pending.retain(|(h, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_reschedules() {
        let mut debouncer = Debouncer::new(ManualScheduler::new(), Duration::from_millis(300));

        debouncer.trigger();
        debouncer.trigger();
        debouncer.trigger();

        // Each trigger cancels the previous task.
        assert_eq!(debouncer.scheduler_mut().scheduled_total(), 3);
        assert_eq!(debouncer.scheduler_mut().pending_len(), 1);
    }

    #[test]
    fn test_acknowledge_only_matches_pending_handle() {
        let mut debouncer = Debouncer::new(ManualScheduler::new(), Duration::from_millis(300));

        debouncer.trigger();
        let stale = debouncer.scheduler_mut().fire_next().unwrap();
        debouncer.trigger();

        assert!(!debouncer.acknowledge(stale));
        let fresh = debouncer.scheduler_mut().fire_next().unwrap();
        assert!(debouncer.acknowledge(fresh));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_cancel_pending() {
        let mut debouncer = Debouncer::new(ManualScheduler::new(), Duration::from_millis(300));

        debouncer.trigger();
        debouncer.cancel_pending();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.scheduler_mut().pending_len(), 0);
    }
}
