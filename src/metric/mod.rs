pub mod hamming;

use crate::Dist;

/// A bounded integer metric over keys of type `K`.
///
/// This is the "small capability interface" the BK-tree is built against: a distance
/// function plus a known upper bound on that distance, used to size child storage
/// (see [`crate::bktree::BkTree`]). The only metric this crate instantiates is
/// [`hamming::HammingMetric<u64>`], but the tree itself does not know that.
pub trait Metric<K> {
    /// Distance between two keys. Must be a true metric: `distance(a, a) == 0`,
    /// symmetric, and satisfy the triangle inequality — the BK-tree's query pruning
    /// relies on the triangle inequality holding exactly.
    fn distance(&self, a: &K, b: &K) -> Dist;

    /// Upper bound on `distance` for any two keys. Used to size the per-node child
    /// array once, rather than growing it unbounded.
    fn max_distance(&self) -> Dist;
}

pub use hamming::HammingMetric;
