//! Incremental coverage index over a stream of 64-bit perceptual fingerprints.
//!
//! A gameplay-fuzzing session is reduced to a multiset of 64-bit pHash fingerprints,
//! one per frame. [`CoverageTracker`] accumulates fingerprints across sessions and
//! maintains, incrementally, both the set of distinct fingerprints and a
//! connected-components clustering of those fingerprints under the
//! Hamming-distance-≤-R relation — the coverage metric this crate exists to
//! compute. It is built on two lower-level structures that are also exposed directly:
//! a [`BkTree`](bktree::BkTree) for radius queries, and a
//! [`UnionFind`](union_find::UnionFind) for the clustering itself.
//!
//! This crate does no I/O, reads no environment variables on its own (see
//! [`config`]), and persists nothing to disk: it is an in-memory, append-only,
//! single-process index. Video decoding, perceptual-hash extraction, and panorama
//! stitching live outside this crate; it only consumes the 64-bit fingerprints they
//! produce.
#[macro_use]
extern crate derivative;

#[cfg(test)]
mod baseline;
pub mod bktree;
pub mod config;
pub mod error;
pub mod metric;
pub mod tracker;
pub mod union_find;

pub use bktree::BkTree;
pub use error::CoverageError;
pub use metric::{HammingMetric, Metric};
pub use tracker::CoverageTracker;
pub use union_find::UnionFind;

/// The distance type shared by every `Metric` in this crate: a Hamming distance over
/// a 64-bit key is always in `0..=64`, comfortably inside a `u8`.
pub type Dist = u8;
