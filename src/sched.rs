// Task scheduler - cancellable timed effects
//
// Every timed effect in the UI (toast dismissal, typing effect, reveal
// stagger) is a scheduled task keyed by an identifier. Scheduling under
// an existing key replaces the pending deadline; cancelling a key drops
// it. The event loop drains due tasks once per tick, so handlers stay
// run-to-completion and nothing blocks.

use crate::page::BlockId;
use std::time::{Duration, Instant};

/// Identifies a pending task. The key *is* the task: firing a key tells
/// the app which state transition to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Complete a block's reveal transition (after its stagger delay)
    Reveal(BlockId),
    /// Start fading a toast out
    ToastFade(u64),
    /// Remove a toast entirely
    ToastRemove(u64),
    /// Start typing a role line (after its staggered start)
    TypeStart(usize),
    /// Reveal the next character of a role line
    TypeChar(usize),
}

/// Deadline-based scheduler drained by the event loop.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<(TaskKey, Instant)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire after `delay`. Replaces any pending
    /// deadline for the same key.
    pub fn schedule(&mut self, key: TaskKey, delay: Duration) {
        self.schedule_at(key, Instant::now() + delay);
    }

    /// Schedule `key` at an absolute deadline.
    pub fn schedule_at(&mut self, key: TaskKey, deadline: Instant) {
        self.cancel(key);
        self.pending.push((key, deadline));
    }

    /// Drop a pending task. No-op if the key isn't scheduled.
    pub fn cancel(&mut self, key: TaskKey) {
        self.pending.retain(|(k, _)| *k != key);
    }

    /// Drain all tasks whose deadline has passed, in deadline order.
    pub fn due(&mut self, now: Instant) -> Vec<TaskKey> {
        let mut fired: Vec<(TaskKey, Instant)> = Vec::new();
        self.pending.retain(|(key, deadline)| {
            if *deadline <= now {
                fired.push((*key, *deadline));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|(_, deadline)| *deadline);
        fired.into_iter().map(|(key, _)| key).collect()
    }

    /// Whether a task is pending under this key
    pub fn is_scheduled(&self, key: TaskKey) -> bool {
        self.pending.iter().any(|(k, _)| *k == key)
    }

    /// Number of pending tasks
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_fires_in_deadline_order() {
        let mut sched = Scheduler::new();
        let now = Instant::now();
        sched.schedule_at(TaskKey::ToastFade(1), now + Duration::from_millis(20));
        sched.schedule_at(TaskKey::ToastFade(2), now + Duration::from_millis(10));
        sched.schedule_at(TaskKey::ToastFade(3), now + Duration::from_millis(30));

        let fired = sched.due(now + Duration::from_millis(25));
        assert_eq!(fired, vec![TaskKey::ToastFade(2), TaskKey::ToastFade(1)]);
        assert!(sched.is_scheduled(TaskKey::ToastFade(3)));
    }

    #[test]
    fn test_cancel_drops_pending_task() {
        let mut sched = Scheduler::new();
        let now = Instant::now();
        sched.schedule_at(TaskKey::TypeChar(0), now + Duration::from_millis(5));
        sched.cancel(TaskKey::TypeChar(0));

        assert!(sched.is_empty());
        assert!(sched.due(now + Duration::from_millis(10)).is_empty());
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let mut sched = Scheduler::new();
        let now = Instant::now();
        sched.schedule_at(TaskKey::TypeStart(0), now + Duration::from_millis(5));
        sched.schedule_at(TaskKey::TypeStart(0), now + Duration::from_millis(50));

        assert_eq!(sched.len(), 1);
        // The earlier deadline no longer exists
        assert!(sched.due(now + Duration::from_millis(10)).is_empty());
        assert_eq!(
            sched.due(now + Duration::from_millis(60)),
            vec![TaskKey::TypeStart(0)]
        );
    }

    #[test]
    fn test_due_is_one_shot() {
        let mut sched = Scheduler::new();
        let now = Instant::now();
        sched.schedule_at(TaskKey::ToastRemove(7), now);

        assert_eq!(sched.due(now), vec![TaskKey::ToastRemove(7)]);
        assert!(sched.due(now).is_empty());
    }
}
