//! The user-visible monitor: ties a [`BkTree`] and a [`UnionFind`] together into the
//! coverage metric described in the crate's top-level docs.

use std::collections::{HashMap, HashSet};

use crate::bktree::BkTree;
use crate::metric::HammingMetric;
use crate::union_find::UnionFind;
use crate::Dist;

/// Incremental coverage index over a stream of 64-bit perceptual fingerprints.
///
/// Not safe for concurrent mutation from multiple threads; callers that parallelize
/// frame extraction should funnel the results through a single writer (see the crate
/// docs' concurrency notes).
pub struct CoverageTracker {
    bktree: BkTree<u64, HammingMetric<u64>>,
    uf: UnionFind,
    key_to_id: HashMap<u64, u32>,
    path_seen: HashSet<String>,
    radius: Dist,
}

impl CoverageTracker {
    /// `radius` is clamped to `0..=64`; a `u8` can never exceed 64 from below so only
    /// the upper bound matters.
    pub fn new(radius: u8) -> Self {
        CoverageTracker {
            bktree: BkTree::new(HammingMetric::default()),
            uf: UnionFind::new(),
            key_to_id: HashMap::new(),
            path_seen: HashSet::new(),
            radius: radius.min(64),
        }
    }

    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Number of disjoint visual clusters discovered so far; the order-independent
    /// coverage metric.
    pub fn component_count(&self) -> usize {
        self.uf.count()
    }

    /// Number of distinct fingerprints ever added; monotonically non-decreasing.
    pub fn distinct_count(&self) -> usize {
        self.bktree.len()
    }

    pub fn contains_key(&self, key: u64) -> bool {
        self.key_to_id.contains_key(&key)
    }

    pub fn contains_path(&self, path_id: &str) -> bool {
        self.path_seen.contains(path_id)
    }

    /// Records a session path-id for later `contains_path` lookups. Returns `true` if
    /// it was newly seen. Has no bearing on the clustering metric.
    pub fn add_path(&mut self, path_id: impl Into<String>) -> bool {
        self.path_seen.insert(path_id.into())
    }

    /// Adds one fingerprint. Returns `true` iff it was newly allocated (an exact
    /// duplicate returns `false` and leaves every counter unchanged).
    #[tracing::instrument(level = "trace", skip(self), fields(radius = self.radius))]
    pub fn add(&mut self, key: u64) -> bool {
        if self.key_to_id.contains_key(&key) {
            tracing::trace!(key, "duplicate fingerprint, skipped");
            return false;
        }

        // Query before inserting: the tree does not yet contain `key`, so the result
        // can never include a spurious self-match.
        let neighbours = self.bktree.find_within(&key, self.radius);

        // Establish the id and union-find slot before touching the BK-tree, per the
        // ordering this crate's error-handling design commits to.
        let id = self.uf.make_set();
        self.key_to_id.insert(key, id);
        let newly_inserted = self.bktree.insert(key);
        debug_assert!(newly_inserted);

        let before = self.uf.count();
        for neighbour in neighbours {
            if let Some(&neighbour_id) = self.key_to_id.get(&neighbour) {
                self.uf.union(id, neighbour_id);
            }
        }
        let merged = before.saturating_sub(self.uf.count());
        if merged > 1 {
            tracing::debug!(key, merged, "single add bridged multiple components");
        }

        true
    }

    /// Convenience: repeated `add` over an iterable of fingerprints.
    pub fn add_all(&mut self, keys: impl IntoIterator<Item = u64>) {
        for key in keys {
            self.add(key);
        }
    }

    /// Returns to empty state.
    pub fn reset(&mut self) {
        *self = CoverageTracker::new(self.radius);
    }
}
