//! Bounded top-K selection.
//!
//! Every offered item is admitted into a [`BoundedHeap`] of capacity `k`,
//! which then evicts its greatest candidate if it overflowed. After N items
//! the heap holds the `k` smallest, at O(N log k) time and O(k) space.

use serde::Serialize;
use tracing::debug;

use tk_core::{checked_k, CoreError, Record};

use crate::compare::{ByTimestamp, Compare};
use crate::heap::BoundedHeap;
use crate::TopKConfig;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct SelectionStats {
    pub k: usize,
    pub seen: u64,
    pub evicted: u64,
    pub peak_candidates: usize,
}

/// Streaming form of the selector; feed items with [`offer`](Self::offer).
#[derive(Debug)]
pub struct TopKSelector<T, C> {
    candidates: BoundedHeap<T, C>,
    stats: SelectionStats,
}

impl<T, C: Compare<T>> TopKSelector<T, C> {
    pub fn new(cfg: TopKConfig, cmp: C) -> Self {
        Self::from_heap(cfg, BoundedHeap::new(cfg.k, cmp))
    }

    /// Preallocate for `expected` offers; `cfg.k` alone never drives allocation.
    pub fn with_expected(cfg: TopKConfig, expected: usize, cmp: C) -> Self {
        Self::from_heap(cfg, BoundedHeap::with_expected(cfg.k, expected, cmp))
    }

    fn from_heap(cfg: TopKConfig, candidates: BoundedHeap<T, C>) -> Self {
        Self { candidates, stats: SelectionStats { k: cfg.k, ..SelectionStats::default() } }
    }

    pub fn offer(&mut self, item: T) {
        self.stats.seen += 1;
        if self.candidates.push(item).is_some() {
            self.stats.evicted += 1;
        }
        self.stats.peak_candidates = self.stats.peak_candidates.max(self.candidates.len());
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The candidate that would be evicted next, if the selector is full.
    pub fn threshold(&self) -> Option<&T> {
        if self.candidates.len() == self.candidates.capacity() {
            self.candidates.peek()
        } else {
            None
        }
    }

    pub fn stats(&self) -> SelectionStats {
        self.stats
    }

    /// Consume the selector, returning candidates ascending under `C`.
    pub fn finish(self) -> Vec<T> {
        self.finish_with_stats().0
    }

    pub fn finish_with_stats(self) -> (Vec<T>, SelectionStats) {
        let stats = self.stats;
        debug!(k = stats.k, seen = stats.seen, evicted = stats.evicted, "top-k selection finished");
        (self.candidates.into_sorted_vec(), stats)
    }
}

impl<T, C: Compare<T>> Extend<T> for TopKSelector<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}

/// The `k` smallest items under `cmp`, ascending. Ties are resolved arbitrarily.
pub fn select_k_by<T, C, I>(items: I, k: usize, cmp: C) -> Vec<T>
where
    C: Compare<T>,
    I: IntoIterator<Item = T>,
{
    let items = items.into_iter();
    let mut selector = TopKSelector::with_expected(TopKConfig::new(k), items.size_hint().0, cmp);
    selector.extend(items);
    selector.finish()
}

/// The `k` records with the smallest timestamps, ascending by timestamp.
pub fn select_k_smallest<L, I>(records: I, k: usize) -> Vec<Record<L>>
where
    I: IntoIterator<Item = Record<L>>,
{
    select_k_by(records, k, ByTimestamp)
}

/// [`select_k_smallest`] for a signed count; negative `k` is an error.
pub fn select_k_smallest_signed<L, I>(records: I, k: i64) -> Result<Vec<Record<L>>, CoreError>
where
    I: IntoIterator<Item = Record<L>>,
{
    Ok(select_k_smallest(records, checked_k(k)?))
}
