#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Reusable priority queue and disjoint-set structures.
//!
//! - [`PriorityQueue`]: array-backed binary heap ordered by a [`Compare`]
//!   strategy, for repeated "best element" access.
//! - [`DisjointSet`]: union-find forest over `0..n` with path compression
//!   and union by rank or size, for dynamic connectivity.
//!
//! Both are single-threaded, allocation-light building blocks. They fail
//! loudly through [`StructureError`] rather than returning sentinels.

pub mod compare;
pub mod disjoint_set;
pub mod error;
pub mod priority_queue;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use compare::{ByKey, Compare, MaxFirst, MinFirst, Reversed};
pub use disjoint_set::{DisjointSet, DisjointSetConfig, PathCompression, UnionStrategy};
pub use error::StructureError;
pub use priority_queue::{MaxHeap, MinHeap, PriorityQueue};

/// Returns the current version of the algokit-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
