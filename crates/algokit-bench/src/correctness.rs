//! Post-operation invariant checkers for correctness validation.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::fmt::Debug;

use algokit_core::{Compare, DisjointSet, MinHeap, PriorityQueue, StructureError};

use crate::workload::{HeapOp, WeightedEdge};

/// Verifies the heap property over the queue's backing store.
pub fn check_heap_property<T: Debug, C: Compare<T>>(
    queue: &PriorityQueue<T, C>,
) -> Result<(), String> {
    let items = queue.as_slice();
    for child in 1..items.len() {
        let parent = (child - 1) / 2;
        if queue.comparator().compare(&items[parent], &items[child]) == Ordering::Greater {
            return Err(format!(
                "heap property violated: parent {parent} ({:?}) below child {child} ({:?})",
                items[parent], items[child]
            ));
        }
    }
    Ok(())
}

/// Verifies that draining the queue yields elements in non-decreasing order
/// under its own strategy, and that exactly `len()` elements come out before
/// `EmptyStructure`.
pub fn check_drain_order<T: Debug, C: Compare<T>>(
    mut queue: PriorityQueue<T, C>,
) -> Result<(), String> {
    let expected = queue.len();
    let mut previous: Option<T> = None;
    let mut drained = 0usize;
    loop {
        match queue.pop() {
            Ok(value) => {
                if let Some(prev) = &previous {
                    if queue.comparator().compare(prev, &value) == Ordering::Greater {
                        return Err(format!("drain out of order: {prev:?} before {value:?}"));
                    }
                }
                previous = Some(value);
                drained += 1;
            }
            Err(StructureError::EmptyStructure) => break,
            Err(other) => return Err(format!("unexpected error while draining: {other}")),
        }
    }
    if drained != expected {
        return Err(format!("drained {drained} elements, expected {expected}"));
    }
    Ok(())
}

/// Replays a heap script against both a [`MinHeap`] and the standard
/// library's `BinaryHeap` and compares every result.
///
/// Pops on an empty queue must return `EmptyStructure`. The heap property is
/// re-checked every `check_every` operations (0 disables the periodic check;
/// the final state is always checked). Returns the number of successful pops.
pub fn replay_heap_ops(ops: &[HeapOp], check_every: usize) -> Result<usize, String> {
    let mut queue = MinHeap::new();
    let mut model: BinaryHeap<Reverse<i64>> = BinaryHeap::new();
    let mut pops = 0usize;

    for (step, op) in ops.iter().enumerate() {
        match *op {
            HeapOp::Push(key) => {
                queue.push(key);
                model.push(Reverse(key));
            }
            HeapOp::Pop => match (queue.pop(), model.pop()) {
                (Ok(got), Some(Reverse(want))) if got == want => pops += 1,
                (Ok(got), Some(Reverse(want))) => {
                    return Err(format!("step {step}: popped {got}, expected {want}"));
                }
                (Err(StructureError::EmptyStructure), None) => {}
                (got, want) => {
                    return Err(format!(
                        "step {step}: queue returned {got:?}, model returned {want:?}"
                    ));
                }
            },
        }
        if queue.size() != model.len() {
            return Err(format!(
                "step {step}: size {} differs from model size {}",
                queue.size(),
                model.len()
            ));
        }
        if check_every != 0 && step % check_every == 0 {
            check_heap_property(&queue).map_err(|e| format!("step {step}: {e}"))?;
        }
    }
    check_heap_property(&queue)?;
    Ok(pops)
}

/// Verifies the partition invariant of a [`DisjointSet`]:
///
/// - every element resolves to a self-rooted representative
/// - the number of distinct roots equals `group_count()`
/// - `group_size` agrees with the listed groups and sizes sum to `len()`
pub fn check_partition(ds: &mut DisjointSet) -> Result<(), String> {
    let n = ds.len();
    let mut roots = Vec::with_capacity(n);
    for x in 0..n {
        let root = ds.find(x).map_err(|e| format!("find({x}): {e}"))?;
        let root_of_root = ds.find(root).map_err(|e| format!("find({root}): {e}"))?;
        if root_of_root != root {
            return Err(format!("root {root} of {x} is not self-rooted"));
        }
        roots.push(root);
    }

    let mut distinct = roots.clone();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() != ds.group_count() {
        return Err(format!(
            "{} distinct roots but group_count() is {}",
            distinct.len(),
            ds.group_count()
        ));
    }

    let groups = ds.groups();
    let total: usize = groups.iter().map(Vec::len).sum();
    if total != n {
        return Err(format!("groups cover {total} elements, universe has {n}"));
    }
    for group in &groups {
        for &member in group {
            let size = ds
                .group_size(member)
                .map_err(|e| format!("group_size({member}): {e}"))?;
            if size != group.len() {
                return Err(format!(
                    "group_size({member}) is {size}, listed group has {}",
                    group.len()
                ));
            }
            if roots[member] != roots[group[0]] {
                return Err(format!("{member} and {} listed together but differ", group[0]));
            }
        }
    }
    Ok(())
}

/// Verifies that `ds` connects exactly the pairs connected by `edges`,
/// using a breadth-first labelling of the graph as reference.
pub fn check_matches_graph(ds: &mut DisjointSet, edges: &[WeightedEdge]) -> Result<(), String> {
    let n = ds.len();
    let mut adjacency = vec![Vec::new(); n];
    for edge in edges {
        if edge.from >= n || edge.to >= n {
            return Err(format!("edge {edge:?} leaves universe of size {n}"));
        }
        adjacency[edge.from].push(edge.to);
        adjacency[edge.to].push(edge.from);
    }

    let mut label = vec![usize::MAX; n];
    let mut next_label = 0usize;
    let mut queue = VecDeque::new();
    for start in 0..n {
        if label[start] != usize::MAX {
            continue;
        }
        label[start] = next_label;
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            for &neighbour in &adjacency[node] {
                if label[neighbour] == usize::MAX {
                    label[neighbour] = next_label;
                    queue.push_back(neighbour);
                }
            }
        }
        next_label += 1;
    }

    if next_label != ds.group_count() {
        return Err(format!(
            "graph has {next_label} components, group_count() is {}",
            ds.group_count()
        ));
    }

    // Root and label must correspond one-to-one.
    let mut label_of_root: HashMap<usize, usize> = HashMap::new();
    for x in 0..n {
        let root = ds.find(x).map_err(|e| format!("find({x}): {e}"))?;
        let known = *label_of_root.entry(root).or_insert(label[x]);
        if known != label[x] {
            return Err(format!(
                "root {root} spans graph components {known} and {}",
                label[x]
            ));
        }
    }
    if label_of_root.len() != next_label {
        return Err(format!(
            "{} roots for {next_label} graph components",
            label_of_root.len()
        ));
    }
    Ok(())
}
