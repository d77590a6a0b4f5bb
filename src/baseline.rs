//! A deliberately weaker, order-dependent baseline, kept only as a test oracle.
//!
//! `GreedyMonitor` is *not* part of the public coverage metric and must never be used
//! for cross-run comparisons: feeding it the same multiset of fingerprints in a
//! different order can change `bucket_count()`. It exists so the test suite can
//! demonstrate why [`crate::CoverageTracker`]'s BK-tree/union-find design is
//! necessary rather than merely convenient.

use crate::metric::{HammingMetric, Metric};
use crate::Dist;

pub struct GreedyMonitor {
    radius: Dist,
    metric: HammingMetric<u64>,
    // First-seen representative of each bucket, in the order buckets were created.
    buckets: Vec<u64>,
}

impl GreedyMonitor {
    pub fn new(radius: u8) -> Self {
        GreedyMonitor {
            radius: radius.min(64),
            metric: HammingMetric::default(),
            buckets: Vec::new(),
        }
    }

    /// Folds `key` into the first existing bucket whose *first-seen* representative
    /// is within `radius`, or starts a new bucket. Returns `true` if a new bucket was
    /// created.
    pub fn add(&mut self, key: u64) -> bool {
        for representative in &self.buckets {
            if self.metric.distance(representative, &key) <= self.radius {
                return false;
            }
        }
        self.buckets.push(key);
        true
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_independence_fails_without_union_find() {
        // A=0b000, B=0b001, C=0b011: dist(A,B)=1, dist(B,C)=1, dist(A,C)=2, radius=1.
        // B is within radius of both A and C, but A and C are not within radius of
        // each other. Whichever of A/C is seen first becomes (and stays) the bucket
        // representative B folds into, so the final bucket count depends on whether
        // A or C arrives first — exactly the failure `CoverageTracker` avoids by
        // unioning on every bridging edge instead of only comparing against a
        // first-seen representative.
        let (a, b, c) = (0b000u64, 0b001u64, 0b011u64);

        let mut a_first = GreedyMonitor::new(1);
        a_first.add(a);
        a_first.add(b);
        a_first.add(c);
        assert_eq!(2, a_first.bucket_count());

        let mut b_first = GreedyMonitor::new(1);
        b_first.add(b);
        b_first.add(a);
        b_first.add(c);
        assert_eq!(1, b_first.bucket_count());

        assert_ne!(
            a_first.bucket_count(),
            b_first.bucket_count(),
            "greedy first-seen monitor is expected to be order-dependent"
        );
    }
}
