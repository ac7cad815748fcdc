use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// One generation of counts. A reset replaces the whole tally, so an
/// increment always lands both halves in the same generation.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    counts: DashMap<String, AtomicU64>,
    total: AtomicU64,
}

impl Tally {
    pub(crate) fn increment(&self, canonical: String) {
        // Read lock first; the shard write lock is only taken for new keys.
        let bumped = self
            .counts
            .get(&canonical)
            .map(|count| count.fetch_add(1, Ordering::Relaxed))
            .is_some();

        if !bumped {
            self.counts
                .entry(canonical)
                .or_insert_with(|| AtomicU64::new(0))
                .fetch_add(1, Ordering::Relaxed);
        }
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn count(&self, canonical: &str) -> u64 {
        self.counts
            .get(canonical)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub(crate) fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub(crate) fn unique(&self) -> usize {
        self.counts.len()
    }

    pub(crate) fn snapshot(&self) -> Vec<(String, u64)> {
        self.counts
            .iter()
            .map(|e| (e.key().clone(), e.value().load(Ordering::Relaxed)))
            .collect()
    }
}
