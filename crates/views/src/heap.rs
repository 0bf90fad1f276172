//! Binary heaps ordered by an injected [`Compare`].

use std::mem;

use crate::compare::Compare;

/// Array-backed binary heap. The top is the greatest element under `C`.
#[derive(Debug, Clone)]
pub struct ComparatorHeap<T, C> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T>> ComparatorHeap<T, C> {
    pub fn new(cmp: C) -> Self {
        Self { data: Vec::new(), cmp }
    }

    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self { data: Vec::with_capacity(capacity), cmp }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        let mut item = self.data.pop()?;
        if !self.data.is_empty() {
            mem::swap(&mut item, &mut self.data[0]);
            self.sift_down(0);
        }
        Some(item)
    }

    /// Drain into a vector ascending under `C`.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out.reverse();
        out
    }

    /// The backing storage, in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.data[a], &self.data[b]).is_gt()
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.greater(pos, parent) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.greater(right, left) { right } else { left };
            if !self.greater(child, pos) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}

/// A [`ComparatorHeap`] that never holds more than `capacity` elements.
///
/// Pushing into a full heap admits the new element first and then evicts the
/// greatest, so the heap always retains the `capacity` smallest seen so far.
#[derive(Debug, Clone)]
pub struct BoundedHeap<T, C> {
    heap: ComparatorHeap<T, C>,
    capacity: usize,
}

impl<T, C: Compare<T>> BoundedHeap<T, C> {
    /// Storage grows with the items pushed; `capacity` only bounds the count.
    pub fn new(capacity: usize, cmp: C) -> Self {
        Self { heap: ComparatorHeap::new(cmp), capacity }
    }

    /// Like [`new`](Self::new), preallocating for about `expected` pushes.
    pub fn with_expected(capacity: usize, expected: usize, cmp: C) -> Self {
        // one slot of headroom for the element admitted before eviction
        let reserve = if expected > capacity { capacity + 1 } else { expected };
        Self { heap: ComparatorHeap::with_capacity(reserve, cmp), capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The current greatest candidate, i.e. the next to be evicted.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Admit `item`; returns whatever was evicted to stay within capacity.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.heap.push(item);
        if self.heap.len() > self.capacity {
            self.heap.pop()
        } else {
            None
        }
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Natural, Reversed};

    fn drain<T, C: Compare<T>>(mut heap: ComparatorHeap<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(x) = heap.pop() {
            out.push(x);
        }
        out
    }

    #[test]
    fn max_heap_pops_largest_first() {
        let mut heap = ComparatorHeap::new(Natural);
        for v in [3, 9, 1, 7, 5] {
            heap.push(v);
        }
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(drain(heap), vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn reversed_natural_is_a_min_heap() {
        let mut heap = ComparatorHeap::new(Reversed(Natural));
        for v in [40, 20, 30, 10] {
            heap.push(v);
        }
        assert_eq!(drain(heap), vec![10, 20, 30, 40]);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut heap: ComparatorHeap<i32, _> = ComparatorHeap::new(Natural);
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn into_sorted_vec_is_ascending_under_comparator() {
        let mut heap = ComparatorHeap::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        for v in [10, 20, 5, 30, 40, -50] {
            heap.push(v);
        }
        assert_eq!(heap.into_sorted_vec(), vec![5, 10, 20, 30, 40, -50]);
    }

    #[test]
    fn into_vec_keeps_heap_order() {
        let mut heap = ComparatorHeap::new(Natural);
        for v in [1, 4, 2, 8] {
            heap.push(v);
        }
        let raw = heap.into_vec();
        assert_eq!(raw.len(), 4);
        assert_eq!(raw[0], 8);
    }

    #[test]
    fn duplicates_survive() {
        let mut heap = ComparatorHeap::new(Natural);
        for v in [2, 2, 1, 2] {
            heap.push(v);
        }
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 2, 2]);
    }

    #[test]
    fn bounded_heap_evicts_the_greatest() {
        let mut heap = BoundedHeap::new(2, Natural);
        assert_eq!(heap.push(5), None);
        assert_eq!(heap.push(3), None);
        assert_eq!(heap.push(4), Some(5));
        assert_eq!(heap.push(9), Some(9));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek(), Some(&4));
        assert_eq!(heap.into_sorted_vec(), vec![3, 4]);
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let mut heap = BoundedHeap::new(usize::MAX, Natural);
        assert_eq!(heap.push(3), None);
        assert_eq!(heap.push(1), None);
        assert_eq!(heap.into_sorted_vec(), vec![1, 3]);

        let heap: BoundedHeap<i32, _> = BoundedHeap::with_expected(usize::MAX, 5, Natural);
        assert_eq!(heap.capacity(), usize::MAX);
        let heap: BoundedHeap<i32, _> = BoundedHeap::with_expected(2, usize::MAX, Natural);
        assert_eq!(heap.capacity(), 2);
    }

    #[test]
    fn zero_capacity_evicts_everything() {
        let mut heap = BoundedHeap::new(0, Natural);
        assert_eq!(heap.push(1), Some(1));
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 0);
    }
}
