//! Common traits for heap data structures
//!
//! This module provides the trait surface shared by every container in the crate:
//!
//! - [`Heap`]: Base trait with push, peek and pop
//! - [`MergeableHeap`]: Extended trait adding destructive merge and swap
//!
//! All heaps are min-heaps with respect to their comparator. The API mirrors
//! `std::collections::BinaryHeap` (which is a max-heap) so generic code and
//! tests can be written once and run against every implementation.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation requires at least one element but the heap is empty
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use binomial_forest::Heap;
/// use binomial_forest::binomial::BinomialHeap;
///
/// fn drain<H: Heap<i32>>(mut heap: H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Some(value) = heap.pop() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut heap: BinomialHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
/// assert_eq!(drain(heap), vec![1, 2, 3]);
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(1) amortized, O(log n) worst case for binomial heaps.
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// Returns `None` when the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n) for binomial heaps (scan of the tree roots).
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// Returns `None` when the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}

/// Heaps that support destructive merging
///
/// `merge` moves every element of `other` into `self` and leaves `other`
/// empty but still usable, like [`Vec::append`].
pub trait MergeableHeap<T>: Heap<T> {
    /// Moves all elements of `other` into this heap, leaving `other` empty
    ///
    /// # Time Complexity
    /// O(log n) for binomial heaps.
    fn merge(&mut self, other: &mut Self);

    /// Exchanges the contents of two heaps
    ///
    /// # Time Complexity
    /// O(1)
    fn swap(&mut self, other: &mut Self);
}
