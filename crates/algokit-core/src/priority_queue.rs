//! Array-backed binary heap ordered by an injected [`Compare`] strategy.
//!
//! The backing `Vec` is read as an implicit binary tree: the element at
//! position `i` has children at `2i + 1` and `2i + 2` and its parent at
//! `(i - 1) / 2`. After every public operation the element at each position
//! compares no worse than both of its children, so position 0 always holds
//! the top element under the strategy.
//!
//! One queue type covers min-heaps, max-heaps and keyed orderings; only the
//! strategy changes:
//!
//! ```
//! use algokit_core::{MaxHeap, MinHeap, PriorityQueue};
//!
//! let mut min: MinHeap<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(min.pop(), Ok(1));
//!
//! let mut max: MaxHeap<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(max.pop(), Ok(8));
//!
//! let mut by_len = PriorityQueue::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! by_len.push("three");
//! by_len.push("one");
//! assert_eq!(by_len.peek(), Ok(&"one"));
//! ```
//!
//! Elements that compare equal leave the queue in no particular relative
//! order. Callers that need FIFO tie-breaking fold a sequence number into the
//! compared value.

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Compare, MaxFirst, MinFirst};
use crate::error::StructureError;

/// A priority queue whose smallest element sits on top.
pub type MinHeap<T> = PriorityQueue<T, MinFirst>;

/// A priority queue whose largest element sits on top.
pub type MaxHeap<T> = PriorityQueue<T, MaxFirst>;

// ---------------------------------------------------------------------------
// PriorityQueue
// ---------------------------------------------------------------------------

/// A binary heap over `T` ordered by the strategy `C`.
///
/// Duplicates are permitted. `pop` and `peek` on an empty queue return
/// [`StructureError::EmptyStructure`] instead of a default value.
#[derive(Clone)]
pub struct PriorityQueue<T, C = MinFirst> {
    items: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> PriorityQueue<T, C> {
    /// Creates an empty queue using the strategy's default value.
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, C::default())
    }

    /// Builds a queue from `items` in O(n) using bottom-up heapify.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_with(items, C::default())
    }
}

impl<T, C: Compare<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Number of elements in the queue.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the queue can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the elements in backing-store order, which is not
    /// sorted beyond the heap property.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The backing store in implicit-tree order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The ordering strategy.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Consumes the queue and returns the backing store, in no particular
    /// order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty queue ordered by `cmp` with room for `capacity`
    /// elements.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a queue ordered by `cmp` from `items` in O(n).
    ///
    /// Sifts down every internal position from the last parent back to the
    /// root, which establishes the heap property without n separate pushes.
    pub fn from_vec_with(items: Vec<T>, cmp: C) -> Self {
        let mut queue = Self { items, cmp };
        queue.heapify();
        queue
    }

    /// Inserts `value`. O(log n).
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the top element. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::EmptyStructure`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T, StructureError> {
        let last = self.items.pop().ok_or(StructureError::EmptyStructure)?;
        if self.items.is_empty() {
            return Ok(last);
        }
        let top = std::mem::replace(&mut self.items[0], last);
        self.sift_down(0);
        Ok(top)
    }

    /// Returns the top element without removing it. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::EmptyStructure`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, StructureError> {
        self.items.first().ok_or(StructureError::EmptyStructure)
    }

    /// Pushes `value` and then pops the top element, with a single sift.
    ///
    /// Cannot fail: the combined multiset always has at least one element.
    /// If `value` is at least as good as the current top it is handed
    /// straight back and the queue is left untouched.
    pub fn push_pop(&mut self, value: T) -> T {
        let top_wins = match self.items.first() {
            Some(top) => self.cmp.compare(top, &value) == Ordering::Less,
            None => false,
        };
        if !top_wins {
            return value;
        }
        let top = std::mem::replace(&mut self.items[0], value);
        self.sift_down(0);
        top
    }

    /// Pops the top element and pushes `value`, with a single sift.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::EmptyStructure`] if the queue is empty; in
    /// that case `value` is dropped and the queue stays empty.
    pub fn replace_top(&mut self, value: T) -> Result<T, StructureError> {
        let slot = self
            .items
            .first_mut()
            .ok_or(StructureError::EmptyStructure)?;
        let top = std::mem::replace(slot, value);
        self.sift_down(0);
        Ok(top)
    }

    /// Consumes the queue and returns every element, top first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    // -----------------------------------------------------------------------
    // Sifting
    // -----------------------------------------------------------------------

    /// `true` if the element at `a` belongs strictly above the one at `b`.
    fn above(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.items[a], &self.items[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.above(idx, parent) {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.above(right, left) {
                right
            } else {
                left
            };
            if !self.above(child, idx) {
                break;
            }
            self.items.swap(idx, child);
            idx = child;
        }
    }

    fn heapify(&mut self) {
        for idx in (0..self.items.len() / 2).rev() {
            self.sift_down(idx);
        }
    }
}

// The strategy is left out: closure strategies do not implement `Debug`.
impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.items.len())
            .field("items", &self.items)
            .finish()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
