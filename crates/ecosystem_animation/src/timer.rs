//! One-shot timers over an injectable clock
//!
//! Nothing here spawns threads. The owner polls [`TimerQueue::drain_due`]
//! from its own loop, and dropping the queue cancels everything still
//! pending, so no callback can fire after its owner is gone.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

new_key_type! {
    pub struct TimerId;
}

/// Monotonic time source, measured from an arbitrary origin
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`
    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct Timer<T> {
    deadline: Duration,
    payload: T,
}

/// Pending one-shot timers carrying a payload each
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, Timer<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
        }
    }

    /// Schedule `payload` to come due `delay` after `now`
    pub fn schedule(&mut self, now: Duration, delay: Duration, payload: T) -> TimerId {
        let deadline = now + delay;
        tracing::trace!("TimerQueue::schedule - due at {:?}", deadline);
        self.timers.insert(Timer { deadline, payload })
    }

    /// Cancel a pending timer, returning its payload
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|timer| timer.payload)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Deadline of a pending timer
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.timers.get(id).map(|timer| timer.deadline)
    }

    /// Remove and return every payload due at `now`, earliest first
    pub fn drain_due(&mut self, now: Duration) -> Vec<T> {
        let mut due: Vec<(Duration, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(id, timer)| (timer.deadline, id))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        due.into_iter()
            .filter_map(|(_, id)| self.timers.remove(id))
            .map(|timer| timer.payload)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Cancel everything
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let clock = ManualClock::new();
        let mut queue = TimerQueue::new();

        queue.schedule(clock.now(), Duration::from_millis(300), "late");
        queue.schedule(clock.now(), Duration::from_millis(100), "early");

        clock.advance(Duration::from_millis(50));
        assert!(queue.drain_due(clock.now()).is_empty());

        clock.advance(Duration::from_millis(300));
        assert_eq!(queue.drain_due(clock.now()), vec!["early", "late"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel() {
        let clock = ManualClock::new();
        let mut queue = TimerQueue::new();

        let id = queue.schedule(clock.now(), Duration::from_millis(400), 1);
        assert!(queue.is_pending(id));
        assert_eq!(queue.deadline(id), Some(Duration::from_millis(400)));
        assert_eq!(queue.cancel(id), Some(1));
        assert_eq!(queue.cancel(id), None);

        clock.advance(Duration::from_secs(1));
        assert!(queue.drain_due(clock.now()).is_empty());
    }

    #[test]
    fn test_deadline_is_inclusive() {
        let clock = ManualClock::new();
        let mut queue = TimerQueue::new();
        queue.schedule(clock.now(), Duration::from_millis(400), ());

        clock.advance(Duration::from_millis(400));
        assert_eq!(queue.drain_due(clock.now()).len(), 1);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(Duration::from_millis(5));
        assert_eq!(clock.now(), Duration::from_millis(5));
    }
}
