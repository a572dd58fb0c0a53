//! Caller code that drives the structures the way problem solutions do.
//!
//! Each function is a small consumer: it builds a structure, feeds it values
//! and assembles its own answer from what comes back. Structure errors are
//! propagated, never swallowed.

use algokit_core::{ByKey, DisjointSet, MinHeap, PriorityQueue, StructureError};

use crate::workload::WeightedEdge;

/// Returns the `k` largest values, largest first.
///
/// Keeps a min-heap of at most `k` elements; each further value is swapped
/// in only if it beats the current smallest kept value.
pub fn top_k_largest<T: Ord + Clone>(values: &[T], k: usize) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }
    let mut kept = MinHeap::with_capacity(k);
    for value in values {
        if kept.len() < k {
            kept.push(value.clone());
        } else {
            kept.push_pop(value.clone());
        }
    }
    let mut out = kept.into_sorted_vec();
    out.reverse();
    out
}

/// Merges sorted lists into one sorted list.
///
/// The heap holds one cursor per list. Ties are broken by list index so the
/// merge is stable across lists.
pub fn k_way_merge<T: Ord + Clone>(lists: &[Vec<T>]) -> Result<Vec<T>, StructureError> {
    let total = lists.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    let mut cursors = MinHeap::with_capacity(lists.len());
    for (list, items) in lists.iter().enumerate() {
        if let Some(first) = items.first() {
            cursors.push((first.clone(), list, 0usize));
        }
    }
    while !cursors.is_empty() {
        let (value, list, pos) = cursors.pop()?;
        out.push(value);
        if let Some(next) = lists[list].get(pos + 1) {
            cursors.push((next.clone(), list, pos + 1));
        }
    }
    Ok(out)
}

/// Result of [`kruskal_minimum_forest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    /// Sum of the chosen edge weights.
    pub total_weight: u64,
    /// Chosen edges, in the order they were accepted.
    pub edges: Vec<WeightedEdge>,
    /// Number of trees in the forest (connected components).
    pub components: usize,
}

/// Builds a minimum spanning forest over `0..n`.
///
/// Edges come off a weight-keyed priority queue; an edge is kept when its
/// `union` actually merges two groups.
///
/// # Errors
///
/// Returns [`StructureError::OutOfRange`] if an edge endpoint is `>= n`.
pub fn kruskal_minimum_forest(
    n: usize,
    edges: &[WeightedEdge],
) -> Result<SpanningForest, StructureError> {
    // The loop may stop before every edge is popped, so endpoints are
    // range-checked up front.
    for edge in edges {
        for index in [edge.from, edge.to] {
            if index >= n {
                return Err(StructureError::OutOfRange { index, len: n });
            }
        }
    }
    let mut ds = DisjointSet::new(n);
    let mut queue =
        PriorityQueue::from_vec_with(edges.to_vec(), ByKey(|e: &WeightedEdge| e.weight));
    let mut chosen = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0u64;
    while chosen.len() + 1 < n && !queue.is_empty() {
        let edge = queue.pop()?;
        if ds.union(edge.from, edge.to)? {
            total_weight += u64::from(edge.weight);
            chosen.push(edge);
        }
    }
    Ok(SpanningForest {
        total_weight,
        edges: chosen,
        components: ds.group_count(),
    })
}

/// Counts connected components of an undirected graph over `0..n`.
///
/// # Errors
///
/// Returns [`StructureError::OutOfRange`] if an endpoint is `>= n`.
pub fn count_components(n: usize, edges: &[(usize, usize)]) -> Result<usize, StructureError> {
    let mut ds = DisjointSet::new(n);
    for &(a, b) in edges {
        ds.union(a, b)?;
    }
    Ok(ds.group_count())
}

/// Returns the first edge whose endpoints were already connected, i.e. the
/// first edge that closes a cycle.
///
/// # Errors
///
/// Returns [`StructureError::OutOfRange`] if an endpoint is `>= n`.
pub fn first_redundant_edge(
    n: usize,
    edges: &[(usize, usize)],
) -> Result<Option<(usize, usize)>, StructureError> {
    let mut ds = DisjointSet::new(n);
    for &(a, b) in edges {
        if !ds.union(a, b)? {
            return Ok(Some((a, b)));
        }
    }
    Ok(None)
}
