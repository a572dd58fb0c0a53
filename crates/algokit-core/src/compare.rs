//! Ordering strategies for [`PriorityQueue`](crate::PriorityQueue).
//!
//! A queue never hard-codes min or max behaviour. It owns a strategy value
//! implementing [`Compare`] and asks it which of two elements belongs closer
//! to the top. `Ordering::Less` means "the first argument wins".
//!
//! ```text
//! MinFirst      smallest element on top (natural Ord)
//! MaxFirst      largest element on top  (reverse natural Ord)
//! ByKey(f)      smallest f(x) on top
//! Reversed(c)   whatever c would put at the bottom goes on top
//! |a, b| ...    any closure returning Ordering
//! ```

use std::cmp::Ordering;

/// A three-way comparison strategy over `T`.
///
/// Implementations must describe a total order (or strict weak order):
/// consistent, transitive, and antisymmetric. A strategy that violates this
/// cannot corrupt memory, but the queue's extraction order becomes
/// unspecified.
pub trait Compare<T: ?Sized> {
    /// Returns `Less` if `a` should sit above `b`, `Greater` if below, and
    /// `Equal` if either may.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Smallest element first. Turns a queue into a min-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Compare<T> for MinFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Largest element first. Turns a queue into a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Compare<T> for MaxFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Orders elements by a derived key, smallest key first.
///
/// Wrap in [`Reversed`] for largest key first.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Inverts an inner strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
