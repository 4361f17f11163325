use crate::foundation::core::Millis;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Virtual clock plus the wake-ups scheduled on it.
///
/// Determinism rule: wake-ups due at the same instant are popped in the order they were
/// scheduled.
pub(crate) struct Timeline<T> {
    now: Millis,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Pending<T>>>,
}

struct Pending<T> {
    due: Millis,
    seq: u64,
    item: T,
}

impl<T> Pending<T> {
    fn key(&self) -> (Millis, u64) {
        (self.due, self.seq)
    }
}

impl<T> PartialEq for Pending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Pending<T> {}

impl<T> PartialOrd for Pending<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Pending<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T> Timeline<T> {
    pub(crate) fn new() -> Self {
        Self {
            now: Millis::ZERO,
            next_seq: 0,
            pending: BinaryHeap::new(),
        }
    }

    pub(crate) fn now(&self) -> Millis {
        self.now
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    /// Schedule `item` to wake `delay_ms` after the current instant.
    pub(crate) fn schedule(&mut self, delay_ms: u64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(Pending {
            due: self.now.after(delay_ms),
            seq,
            item,
        }));
    }

    pub(crate) fn next_due(&self) -> Option<Millis> {
        self.pending.peek().map(|Reverse(p)| p.due)
    }

    /// Pop the earliest wake-up due at or before `limit`, moving the clock to its due time.
    pub(crate) fn pop_due(&mut self, limit: Millis) -> Option<T> {
        if self.next_due()? > limit {
            return None;
        }
        let Reverse(p) = self.pending.pop()?;
        self.now = self.now.max(p.due);
        Some(p.item)
    }

    /// Move the clock forward to `t`; never moves it backwards.
    pub(crate) fn settle_at(&mut self, t: Millis) {
        self.now = self.now.max(t);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/clock.rs"]
mod tests;
