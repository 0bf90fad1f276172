//! Orderings that can be injected into a heap.

use std::cmp::Ordering;

use tk_core::Record;

/// A total order over `T`, supplied to a heap instead of relying on `Ord`.
///
/// The heap keeps the greatest element under this order on top.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The type's own `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Records by timestamp only; labels never participate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByTimestamp;

impl<L> Compare<Record<L>> for ByTimestamp {
    fn compare(&self, a: &Record<L>, b: &Record<L>) -> Ordering {
        a.ts.cmp(&b.ts)
    }
}

/// Flips an ordering, turning a max-heap into a min-heap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
