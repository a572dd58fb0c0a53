//! Serde support for both structures (feature `serde`).
//!
//! A [`PriorityQueue`] is written as a plain sequence of its elements and
//! re-heapified on the way back in, so any sequence restores a valid queue.
//!
//! A [`DisjointSet`] is written as its raw arrays plus bookkeeping:
//!
//! ```json
//! {
//!   "parent": [0, 0, 2],
//!   "rank": [1, 0, 0],
//!   "size": [2, 1, 1],
//!   "group_count": 2,
//!   "config": { "union_strategy": "by_rank", "path_compression": "full" }
//! }
//! ```
//!
//! Reading one back validates the forest (lengths, ranges, acyclic parent
//! chains, root sizes, group count, ranks) and fails with the
//! [`StructureError::InvalidConstruction`](crate::StructureError) message
//! instead of producing a structure whose partition invariant is broken.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compare::Compare;
use crate::disjoint_set::{DisjointSet, DisjointSetConfig};
use crate::priority_queue::PriorityQueue;

impl<T: Serialize, C> Serialize for PriorityQueue<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T, C> Deserialize<'de> for PriorityQueue<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    group_count: usize,
    #[serde(default)]
    config: DisjointSetConfig,
}

impl<'de> Deserialize<'de> for DisjointSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDisjointSet::deserialize(deserializer)?;
        DisjointSet::from_parts(
            raw.parent,
            raw.rank,
            raw.size,
            raw.group_count,
            raw.config,
        )
        .map_err(D::Error::custom)
    }
}
