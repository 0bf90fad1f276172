//! Core types for top-K selection.

use serde::{Deserialize, Serialize};

pub type Timestamp = i64;

/// A labeled, timestamped item. Ordered by `ts` in every selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Record<L = char> {
    pub label: L,
    pub ts: Timestamp,
}

impl<L> Record<L> {
    pub fn new(label: L, ts: Timestamp) -> Self {
        Self { label, ts }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("invalid argument: k must be non-negative, got {k}")]
    InvalidArgument { k: i64 },
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convert a caller-supplied count into a `usize`, rejecting negatives.
pub fn checked_k(k: i64) -> Result<usize, CoreError> {
    usize::try_from(k).map_err(|_| CoreError::InvalidArgument { k })
}

pub mod logs;
