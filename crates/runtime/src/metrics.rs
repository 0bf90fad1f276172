use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tk_views::SelectionStats;

#[derive(Clone, Default)]
pub struct MetricsRegistry {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    selections: AtomicU64,
    records_seen: AtomicU64,
    evictions: AtomicU64,
    candidates_peak: AtomicU64,
}

impl MetricsRegistry {
    pub fn record_selection(&self, stats: &SelectionStats) {
        self.inner.selections.fetch_add(1, Ordering::Relaxed);
        self.inner.records_seen.fetch_add(stats.seen, Ordering::Relaxed);
        self.inner.evictions.fetch_add(stats.evicted, Ordering::Relaxed);
        self.inner
            .candidates_peak
            .fetch_max(stats.peak_candidates as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            selections: self.inner.selections.load(Ordering::Relaxed),
            records_seen: self.inner.records_seen.load(Ordering::Relaxed),
            evictions: self.inner.evictions.load(Ordering::Relaxed),
            candidates_peak: self.inner.candidates_peak.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub selections: u64,
    pub records_seen: u64,
    pub evictions: u64,
    pub candidates_peak: u64,
}

impl MetricsSnapshot {
    pub fn to_json_line(&self, label: &str, elapsed: Option<Duration>) -> String {
        #[derive(Serialize)]
        struct Line<'a> {
            label: &'a str,
            #[serde(flatten)]
            snapshot: &'a MetricsSnapshot,
            elapsed_us: Option<u128>,
        }

        let payload = Line { label, snapshot: self, elapsed_us: elapsed.map(|d| d.as_micros()) };
        serde_json::to_string(&payload).unwrap_or_else(|_| String::from("{}"))
    }
}

pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(seen: u64, evicted: u64, peak: usize) -> SelectionStats {
        SelectionStats { k: peak, seen, evicted, peak_candidates: peak }
    }

    #[test]
    fn selections_accumulate_and_peak_is_max() {
        let registry = MetricsRegistry::default();
        registry.record_selection(&stats(5, 2, 3));
        registry.clone().record_selection(&stats(10, 9, 1));
        assert_eq!(
            registry.snapshot(),
            MetricsSnapshot { selections: 2, records_seen: 15, evictions: 11, candidates_peak: 3 }
        );
    }

    #[test]
    fn json_line_is_flat() {
        let registry = MetricsRegistry::default();
        registry.record_selection(&stats(5, 2, 3));
        let line = registry.snapshot().to_json_line("earliest_logs", Some(Duration::from_micros(42)));
        assert_eq!(
            line,
            r#"{"label":"earliest_logs","selections":1,"records_seen":5,"evictions":2,"candidates_peak":3,"elapsed_us":42}"#
        );
    }
}
