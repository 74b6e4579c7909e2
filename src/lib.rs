//! prio_heap - comparator-driven binary heap
//!
//! An array-backed priority queue ordered by a caller-supplied comparator.
//! Besides the usual push/pop/peek it offers `replace_top` and `push_pop`,
//! which swap the root in place without growing or shrinking storage.
//!
//! On top of the heap sits [`TopK`], a bounded collector that keeps the K
//! best elements of a stream, replacing its worst element once it is full.

pub mod benchmark;
pub mod data_structures;

pub use data_structures::compare::{Compare, KeyOrder, MaxOrder, MinOrder, Reversed};
/// Re-export main types for convenient use
pub use data_structures::priority_heap::PriorityHeap;
pub use data_structures::top_k::TopK;

/// Error types for the library
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Top-K capacity must be at least 1")]
    ZeroCapacity,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
