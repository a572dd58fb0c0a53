#![allow(clippy::expect_used)]

use super::*;
use crate::compare::{ByKey, Reversed};

/// Checks the heap property over the raw backing store.
fn assert_heap_property<T: fmt::Debug, C: Compare<T>>(queue: &PriorityQueue<T, C>) {
    let items = queue.as_slice();
    for child in 1..items.len() {
        let parent = (child - 1) / 2;
        assert_ne!(
            queue.comparator().compare(&items[parent], &items[child]),
            Ordering::Greater,
            "parent {parent} ({:?}) sits below child {child} ({:?})",
            items[parent],
            items[child]
        );
    }
}

fn drain<T, C: Compare<T>>(queue: &mut PriorityQueue<T, C>) -> Vec<T> {
    let mut out = Vec::new();
    while !queue.is_empty() {
        out.push(queue.pop().expect("non-empty queue pops"));
    }
    out
}

// ---------------------------------------------------------------------------
// Empty-queue behaviour
// ---------------------------------------------------------------------------

#[test]
fn new_queue_is_empty() {
    let queue: MinHeap<i32> = MinHeap::new();
    assert_eq!(queue.size(), 0);
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
}

#[test]
fn pop_on_empty_is_an_error() {
    let mut queue: MinHeap<i32> = MinHeap::new();
    assert_eq!(queue.pop(), Err(StructureError::EmptyStructure));
}

#[test]
fn peek_on_empty_is_an_error() {
    let queue: MaxHeap<u8> = MaxHeap::new();
    assert_eq!(queue.peek(), Err(StructureError::EmptyStructure));
}

#[test]
fn pop_after_drain_is_an_error() {
    let mut queue = MinHeap::new();
    queue.push(1);
    queue.push(2);
    drain(&mut queue);
    assert_eq!(queue.pop(), Err(StructureError::EmptyStructure));
    assert_eq!(queue.peek(), Err(StructureError::EmptyStructure));
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn min_heap_pops_ascending() {
    let mut queue = MinHeap::new();
    for value in [5, 3, 8, 1, 4] {
        queue.push(value);
        assert_heap_property(&queue);
    }
    assert_eq!(queue.peek(), Ok(&1));
    for expected in [1, 3, 4, 5, 8] {
        assert_eq!(queue.pop(), Ok(expected));
        assert_heap_property(&queue);
    }
    assert!(queue.is_empty());
}

#[test]
fn max_heap_pops_descending() {
    let mut queue = MaxHeap::new();
    queue.extend([5, 3, 8, 1, 4]);
    assert_eq!(drain(&mut queue), vec![8, 5, 4, 3, 1]);
}

#[test]
fn identical_values_all_come_back() {
    let mut queue = MinHeap::new();
    for _ in 0..10 {
        queue.push(7);
    }
    assert_eq!(queue.size(), 10);
    for _ in 0..10 {
        assert_eq!(queue.pop(), Ok(7));
    }
    assert_eq!(queue.pop(), Err(StructureError::EmptyStructure));
}

#[test]
fn closure_comparator_orders_by_frequency() {
    // (count, letter): most frequent first, letter ascending on ties.
    let mut queue = PriorityQueue::with_comparator(|a: &(u32, char), b: &(u32, char)| {
        b.0.cmp(&a.0).then(a.1.cmp(&b.1))
    });
    queue.extend([(1, 'c'), (3, 'a'), (3, 'b'), (2, 'd')]);
    assert_eq!(
        queue.into_sorted_vec(),
        vec![(3, 'a'), (3, 'b'), (2, 'd'), (1, 'c')]
    );
}

#[test]
fn by_key_and_reversed_strategies() {
    let mut nearest = PriorityQueue::with_comparator(ByKey(|p: &(i32, i32)| p.0 * p.0 + p.1 * p.1));
    nearest.extend([(3, 4), (1, 1), (-2, 0), (0, 5)]);
    assert_eq!(nearest.pop(), Ok((1, 1)));
    assert_eq!(nearest.pop(), Ok((-2, 0)));

    let mut farthest = PriorityQueue::with_comparator(Reversed(ByKey(|s: &String| s.len())));
    farthest.extend(["a".to_owned(), "abc".to_owned(), "ab".to_owned()]);
    assert_eq!(farthest.pop().as_deref(), Ok("abc"));
}

#[test]
fn sequence_number_gives_fifo_ties() {
    let mut queue = MinHeap::new();
    for (seq, task) in ["b", "a", "c"].into_iter().enumerate() {
        queue.push((0u8, seq, task));
    }
    let order: Vec<&str> = queue.into_sorted_vec().into_iter().map(|t| t.2).collect();
    assert_eq!(order, vec!["b", "a", "c"]);
}

// ---------------------------------------------------------------------------
// Bulk construction
// ---------------------------------------------------------------------------

#[test]
fn from_vec_heapifies() {
    let queue = MinHeap::from_vec(vec![9, 2, 7, 4, 4, 0, 11, 3]);
    assert_heap_property(&queue);
    assert_eq!(queue.peek(), Ok(&0));
    assert_eq!(queue.into_sorted_vec(), vec![0, 2, 3, 4, 4, 7, 9, 11]);
}

#[test]
fn from_vec_with_empty_and_single() {
    let empty = PriorityQueue::from_vec_with(Vec::<i32>::new(), MaxFirst);
    assert!(empty.is_empty());
    let single = PriorityQueue::from_vec_with(vec![42], MaxFirst);
    assert_eq!(single.peek(), Ok(&42));
}

#[test]
fn collect_builds_valid_heap() {
    let queue: MaxHeap<i64> = (0..100).map(|i| (i * 37) % 101).collect();
    assert_heap_property(&queue);
    assert_eq!(queue.len(), 100);
    assert_eq!(queue.peek(), Ok(&100));
}

// ---------------------------------------------------------------------------
// Combined operations
// ---------------------------------------------------------------------------

#[test]
fn push_pop_returns_value_when_it_wins() {
    let mut queue = MinHeap::from_vec(vec![5, 6, 7]);
    assert_eq!(queue.push_pop(1), 1);
    assert_eq!(queue.push_pop(5), 5);
    assert_eq!(queue.as_slice().len(), 3);
    assert_eq!(queue.peek(), Ok(&5));
}

#[test]
fn push_pop_returns_top_when_it_wins() {
    let mut queue = MinHeap::from_vec(vec![5, 6, 7]);
    assert_eq!(queue.push_pop(10), 5);
    assert_heap_property(&queue);
    assert_eq!(queue.into_sorted_vec(), vec![6, 7, 10]);
}

#[test]
fn push_pop_on_empty_hands_value_back() {
    let mut queue: MinHeap<i32> = MinHeap::new();
    assert_eq!(queue.push_pop(3), 3);
    assert!(queue.is_empty());
}

#[test]
fn replace_top_swaps_out_current_top() {
    let mut queue = MaxHeap::from_vec(vec![1, 9, 4]);
    assert_eq!(queue.replace_top(2), Ok(9));
    assert_heap_property(&queue);
    assert_eq!(queue.into_sorted_vec(), vec![4, 2, 1]);
}

#[test]
fn replace_top_on_empty_is_an_error() {
    let mut queue: MaxHeap<i32> = MaxHeap::new();
    assert_eq!(queue.replace_top(2), Err(StructureError::EmptyStructure));
    assert!(queue.is_empty());
}

#[test]
fn bounded_top_k_with_push_pop() {
    // Keep the three largest values in a min-heap of size three.
    let mut window = MinHeap::with_capacity(3);
    for value in [4, 1, 9, 7, 3, 8, 2] {
        if window.len() < 3 {
            window.push(value);
        } else {
            window.push_pop(value);
        }
    }
    assert_eq!(window.into_sorted_vec(), vec![7, 8, 9]);
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

#[test]
fn size_tracks_pushes_and_pops() {
    let mut queue = MinHeap::new();
    for i in 0..8 {
        queue.push(i);
    }
    for _ in 0..3 {
        queue.pop().expect("queue has elements");
    }
    assert_eq!(queue.size(), 5);
}

#[test]
fn clear_keeps_capacity() {
    let mut queue = MinHeap::with_capacity(16);
    queue.extend(0..10);
    let capacity = queue.capacity();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), capacity);
}

#[test]
fn iter_visits_every_element_once() {
    let queue = MinHeap::from_vec(vec![3, 1, 2]);
    let mut seen: Vec<i32> = queue.iter().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!((&queue).into_iter().count(), 3);
}

#[test]
fn into_vec_returns_every_element() {
    let queue = MaxHeap::from_vec(vec![3, 1, 2, 2]);
    let mut items = queue.into_vec();
    items.sort_unstable();
    assert_eq!(items, vec![1, 2, 2, 3]);
}

#[test]
fn clone_is_independent() {
    let mut original = MinHeap::from_vec(vec![2, 1]);
    let copy = original.clone();
    original.pop().expect("queue has elements");
    assert_eq!(copy.len(), 2);
    assert_eq!(original.len(), 1);
}

#[test]
fn debug_shows_len() {
    let queue = MinHeap::from_vec(vec![1]);
    let rendered = format!("{queue:?}");
    assert!(rendered.contains("len: 1"), "{rendered}");
}
