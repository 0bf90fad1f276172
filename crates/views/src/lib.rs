//! Reusable selection views: comparator heaps and bounded top-K.

use serde::{Deserialize, Serialize};
use tk_core::{checked_k, CoreError};

pub mod compare;
pub mod heap;
pub mod select;

pub use compare::{ByTimestamp, Compare, Natural, Reversed};
pub use heap::{BoundedHeap, ComparatorHeap};
pub use select::{
    select_k_by, select_k_smallest, select_k_smallest_signed, SelectionStats, TopKSelector,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopKConfig {
    pub k: usize,
}

impl Default for TopKConfig {
    fn default() -> Self {
        Self { k: 10 }
    }
}

impl TopKConfig {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Build a config from a signed count, as it arrives from a CLI or JSON.
    pub fn from_signed(k: i64) -> Result<Self, CoreError> {
        Ok(Self { k: checked_k(k)? })
    }
}
