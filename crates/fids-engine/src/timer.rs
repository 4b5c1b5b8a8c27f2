//! Virtual-time timer queue.
//!
//! Every timer on the board (view dwell, scroll tick, polls, the daily
//! refresh, the clock) lives in one [`TimerQueue`]. Time only moves when the
//! owner calls [`TimerQueue::advance_to`], so the runtime can drive it from a
//! real clock while tests step it deterministically.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Shortest allowed period for a repeating timer
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// "Schedule after delay", "schedule repeating" and "cancel" over virtual time.
pub trait Scheduler<Ev> {
    /// Current virtual time, measured from the start of the board
    fn now(&self) -> Duration;

    fn schedule_after(&mut self, delay: Duration, event: Ev) -> TimerId;

    /// Fire first after `first`, then every `period` after that
    fn schedule_repeating(&mut self, first: Duration, period: Duration, event: Ev) -> TimerId;

    /// Returns false when the timer already fired or was cancelled
    fn cancel(&mut self, id: TimerId) -> bool;
}

/// A timer that came due
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<E> {
    pub id: TimerId,
    pub deadline: Duration,
    pub event: E,
}

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    event: E,
    period: Option<Duration>,
}

/// Deadline-ordered timers; equal deadlines fire in scheduling order.
#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Entry<E>>,
    index: HashMap<TimerId, (Duration, u64)>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BTreeMap::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: Clone> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns false when the timer already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Move virtual time forward. Time never goes backwards.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pending timers whose event matches `pred`
    pub fn count_matching(&self, pred: impl Fn(&E) -> bool) -> usize {
        self.queue.values().filter(|entry| pred(&entry.event)).count()
    }

    /// Take the earliest timer due at or before the current time.
    ///
    /// Repeating timers are re-armed relative to their own deadline, keeping
    /// their id.
    pub fn pop_due(&mut self) -> Option<Fired<E>> {
        let (&key, _) = self.queue.iter().next()?;
        let (deadline, _) = key;
        if deadline > self.now {
            return None;
        }

        let entry = self.queue.remove(&key)?;
        self.index.remove(&entry.id);

        if let Some(period) = entry.period {
            let seq = self.bump_seq();
            let next_key = (deadline + period, seq);
            self.index.insert(entry.id, next_key);
            self.queue.insert(
                next_key,
                Entry {
                    id: entry.id,
                    event: entry.event.clone(),
                    period: entry.period,
                },
            );
        }

        Some(Fired {
            id: entry.id,
            deadline,
            event: entry.event,
        })
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn insert(&mut self, deadline: Duration, event: E, period: Option<Duration>) -> TimerId {
        let seq = self.bump_seq();
        let id = TimerId(seq);
        let key = (deadline, seq);
        self.index.insert(id, key);
        self.queue.insert(key, Entry { id, event, period });
        id
    }
}

impl<E: Clone, Ev: Into<E>> Scheduler<Ev> for TimerQueue<E> {
    fn now(&self) -> Duration {
        TimerQueue::now(self)
    }

    fn schedule_after(&mut self, delay: Duration, event: Ev) -> TimerId {
        let deadline = self.now + delay;
        self.insert(deadline, event.into(), None)
    }

    fn schedule_repeating(&mut self, first: Duration, period: Duration, event: Ev) -> TimerId {
        let deadline = self.now + first;
        self.insert(deadline, event.into(), Some(period.max(MIN_PERIOD)))
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        TimerQueue::cancel(self, id)
    }
}
