use thiserror::Error;

/// Caller-contract violations surfaced by the checked corners of this crate's API.
///
/// Nothing in this crate does I/O, so this enum does not grow a variant for it; the only
/// fallible path is a caller handing a union-find index that was never allocated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoverageError {
    #[error("index {index} out of bounds for union-find of size {len}")]
    IndexOutOfBounds { index: u32, len: usize },
}
