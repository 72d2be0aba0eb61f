//! Pending-Value Queue Implementation.
//!
//! This module implements the per-word write history at the heart of the
//! consistency model. Each cached word owns one queue holding, oldest to
//! newest, every committed value that has not yet been confirmed retired by
//! an observed read. It provides:
//! 1. **History Growth:** Appending newly committed values at the tail.
//! 2. **Tolerant Reconciliation:** Front-retiring matching for instruction
//!    fetches, recording every inspected value as a candidate.
//! 3. **Newest-Value Access:** The strict comparison point for data reads.

use std::collections::{BTreeSet, VecDeque};

use tracing::trace;

/// Per-word ordered history of writes not yet confirmed retired.
///
/// The queue is never empty: it is seeded at construction and entries are
/// only popped while more than one remains. The newest entry (the back)
/// always equals the most recent committed value for the word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingQueue {
    values: VecDeque<u32>,
}

impl PendingQueue {
    /// Creates a queue holding a single seed value.
    ///
    /// # Arguments
    ///
    /// * `value` - The word's deterministic baseline value.
    ///
    /// # Returns
    ///
    /// A new `PendingQueue` of depth one.
    pub fn seeded(value: u32) -> Self {
        let mut values = VecDeque::with_capacity(1);
        values.push_back(value);
        Self { values }
    }

    /// Returns the newest (most recently committed) value.
    pub fn newest(&self) -> u32 {
        // Queue is never empty after seeding.
        self.values.back().copied().unwrap_or_default()
    }

    /// Returns the oldest unretired value.
    pub fn oldest(&self) -> u32 {
        // Queue is never empty after seeding.
        self.values.front().copied().unwrap_or_default()
    }

    /// Returns the number of unretired values.
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    /// Appends a newly committed value at the tail.
    ///
    /// Callers only push values that differ from [`newest`](Self::newest),
    /// so the history never holds consecutive duplicates.
    ///
    /// # Arguments
    ///
    /// * `value` - The merged word committed by a write.
    pub fn push(&mut self, value: u32) {
        self.values.push_back(value);
    }

    /// Iterates the unretired values, oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }

    /// Reconciles an observed fetch value against the history.
    ///
    /// Walks from the front, permanently retiring every entry older than the
    /// first match while more than one entry remains. Every inspected front
    /// value, matching or not, is recorded into `candidates`; the final
    /// front value is always recorded even when it mismatches. The queue is
    /// left holding at least one entry.
    ///
    /// Observing a newer value retires everything older: once progress is
    /// seen, the history cannot go backward.
    ///
    /// # Arguments
    ///
    /// * `observed` - The value the implementation returned for this word.
    /// * `candidates` - Accumulates every value that would have been accepted.
    ///
    /// # Returns
    ///
    /// `true` when the observed value matched an unretired entry.
    pub fn reconcile(&mut self, observed: u32, candidates: &mut BTreeSet<u32>) -> bool {
        while self.depth() > 1 {
            let front = self.oldest();
            let _ = candidates.insert(front);
            if front == observed {
                break;
            }
            trace!(retired = front, "retiring stale pending value");
            let _ = self.values.pop_front();
        }
        let front = self.oldest();
        let _ = candidates.insert(front);
        front == observed
    }
}
