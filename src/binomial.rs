//! Binomial Heap implementation
//!
//! A binomial heap is a forest of heap-ordered binomial trees with:
//! - O(1) amortized / O(log n) worst-case insert
//! - O(log n) find-min and delete-min
//! - O(log n) merge
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees, the larger root becoming the
//!   leftmost child of the smaller
//! - Bₖ has exactly 2ᵏ nodes and its root has k children of orders k-1, ..., 0
//!
//! The heap keeps at most one tree of each order. Reading the occupied orders
//! as bits gives the binary representation of the element count: a heap of
//! 5 elements holds a B₀ and a B₂.
//!
//! **Key Operations**:
//! - **Insert**: merge a one-node forest into the heap (binary increment)
//! - **Merge**: add the two forests order by order with a carry (binary addition)
//! - **Find-min**: scan the O(log n) roots
//! - **Delete-min**: remove the minimum root; its children form a forest of
//!   orders 0..k which is merged back in
//!
//! Nodes are singly owned boxes: a node owns its first child, and every child
//! owns its next sibling. Merging never allocates and never copies elements.
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::BinomialHeap;
//!
//! let mut heap = BinomialHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! assert_eq!(heap.top(), &3);
//!
//! let mut other: BinomialHeap<i32> = [4, 1].into_iter().collect();
//! heap.merge(&mut other);
//! assert!(other.is_empty());
//!
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 4, 5, 8]);
//! ```

use crate::compare::{Compare, Natural};
use crate::forest::Forest;
use crate::traits::{Heap, HeapError, MergeableHeap};
use log::{trace, warn};
use std::fmt;
use std::mem;
use std::thread;

/// A min-heap backed by a forest of binomial trees
///
/// Elements are ordered by the comparator `C`, which defaults to the
/// element's [`Ord`] impl. See [`Descending`](crate::compare::Descending) for
/// a max-heap.
///
/// # Example
///
/// ```rust
/// use binomial_forest::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// for value in [5, 3, 8, 1] {
///     heap.push(value);
/// }
///
/// let mut tops = Vec::new();
/// while !heap.is_empty() {
///     tops.push(*heap.top());
///     heap.pop();
/// }
/// assert_eq!(tops, vec![1, 3, 5, 8]);
/// ```
#[derive(Clone)]
pub struct BinomialHeap<T, C = Natural> {
    /// Trees indexed by order; slot k holds a Bₖ or nothing
    forest: Forest<T>,
    /// Number of elements, always the sum of 2ᵏ over occupied slots k
    len: usize,
    cmp: C,
}

/// Recounts `len` from the forest when a comparator panic unwinds through an
/// update, so the count never disagrees with the trees that survived
struct LenGuard<'a, T> {
    forest: &'a mut Forest<T>,
    len: &'a mut usize,
}

impl<T> Drop for LenGuard<'_, T> {
    fn drop(&mut self) {
        if thread::panicking() {
            let recovered = self.forest.recount();
            warn!(
                "comparator panicked mid-update: {} of {} elements kept",
                recovered, *self.len
            );
            *self.len = recovered;
        }
    }
}

impl<T: Ord> BinomialHeap<T> {
    /// Creates an empty heap ordered by `T`'s [`Ord`] impl
    pub const fn new() -> Self {
        BinomialHeap {
            forest: Forest::new(),
            len: 0,
            cmp: Natural,
        }
    }
}

impl<T, C: Compare<T>> BinomialHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        BinomialHeap {
            forest: Forest::new(),
            len: 0,
            cmp,
        }
    }

    /// Returns the comparator that orders this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no elements
    #[doc(alias = "empty")]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an element
    ///
    /// **Time Complexity**: O(1) amortized, O(log n) worst-case
    ///
    /// **Algorithm**: wrap `value` in a B₀ tree and merge that one-tree forest
    /// into the heap. This is a binary increment: the carry ripples through
    /// the run of occupied low orders, which is O(1) on average.
    ///
    /// If the comparator panics, the trees being linked at that moment
    /// (possibly including `value`) are dropped and [`len`](Self::len) is
    /// recounted from the trees that remain.
    pub fn push(&mut self, value: T) {
        let guard = LenGuard {
            forest: &mut self.forest,
            len: &mut self.len,
        };
        guard.forest.merge(Forest::singleton(value), &self.cmp);
        *guard.len += 1;
    }

    /// Returns the minimum element
    ///
    /// **Time Complexity**: O(log n), a scan over the tree roots
    ///
    /// When several elements compare equal to the minimum, any one of them
    /// may be returned.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Use [`peek`](Self::peek) or
    /// [`try_top`](Self::try_top) when emptiness is possible.
    pub fn top(&self) -> &T {
        debug_assert_eq!(self.forest.is_empty(), self.len == 0);
        match self.peek() {
            Some(value) => value,
            None => panic!("top() called on an empty BinomialHeap"),
        }
    }

    /// Returns the minimum element, or [`HeapError::Empty`]
    pub fn try_top(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Returns the minimum element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        let order = self.forest.min_order(&self.cmp)?;
        self.forest.root(order)
    }

    /// Removes and returns the minimum element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Scan the roots for the minimum (same rule as [`top`](Self::top))
    /// 2. Take that Bₖ out of its slot
    /// 3. Detach its k children; their child list runs from order k-1 down to
    ///    0, so reversed they form a forest with every slot 0..k occupied
    /// 4. Merge that forest back into the heap
    ///
    /// Returns `None` if the heap is empty.
    ///
    /// If the comparator panics while the children are merged back, the
    /// removed element and the trees being linked are dropped, and
    /// [`len`](Self::len) is recounted from the trees that remain.
    pub fn pop(&mut self) -> Option<T> {
        debug_assert_eq!(self.forest.is_empty(), self.len == 0);
        let order = self.forest.min_order(&self.cmp)?;
        trace!("pop: minimum root is the order-{} tree", order);

        let guard = LenGuard {
            forest: &mut self.forest,
            len: &mut self.len,
        };
        let (value, children) = guard.forest.remove_root(order);
        guard.forest.merge(children, &self.cmp);
        *guard.len -= 1;
        Some(value)
    }

    /// Removes and returns the minimum element, or [`HeapError::Empty`]
    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Moves every element of `other` into this heap
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// The two forests are added order by order with a carry, exactly like
    /// binary addition. No node is copied or reallocated; `other` is left
    /// empty and can be reused.
    ///
    /// If the comparator panics, `other` is still left empty, the trees being
    /// linked at that moment are dropped, and [`len`](Self::len) is recounted
    /// from the trees that remain. Both heaps stay usable.
    pub fn merge(&mut self, other: &mut Self) {
        let forest = mem::replace(&mut other.forest, Forest::new());
        let moved = mem::take(&mut other.len);
        trace!("merge: {} elements into {}", moved, self.len);

        let guard = LenGuard {
            forest: &mut self.forest,
            len: &mut self.len,
        };
        guard.forest.merge(forest, &self.cmp);
        *guard.len += moved;
    }

    /// Exchanges the contents (and comparators) of two heaps in O(1)
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.forest.clear();
        self.len = 0;
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Orders of the binomial trees currently in the forest, ascending
    ///
    /// These are exactly the set bits of [`len`](Self::len).
    ///
    /// ```rust
    /// use binomial_forest::BinomialHeap;
    ///
    /// let heap: BinomialHeap<i32> = (1..=5).collect();
    /// assert_eq!(heap.occupied_orders().collect::<Vec<_>>(), vec![0, 2]);
    /// ```
    pub fn occupied_orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.forest.orders()
    }

    /// Checks every structural invariant of the heap
    ///
    /// Verifies heap order in every tree, the child-order layout of every
    /// node, that each tree sits in the slot matching its order, and that the
    /// node count equals [`len`](Self::len). O(n); meant for tests.
    pub fn verify_structure(&self) -> bool {
        self.forest.checked_len(&self.cmp) == Some(self.len)
    }
}

impl<T: Ord> Default for BinomialHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for BinomialHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("len", &self.len)
            .field("orders", &self.forest.orders().collect::<Vec<_>>())
            .finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinomialHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinomialHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = BinomialHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> From<Vec<T>> for BinomialHeap<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for BinomialHeap<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, item: T) {
        BinomialHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        BinomialHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinomialHeap::pop(self)
    }
}

impl<T, C: Compare<T> + Default> MergeableHeap<T> for BinomialHeap<T, C> {
    fn merge(&mut self, other: &mut Self) {
        BinomialHeap::merge(self, other)
    }

    fn swap(&mut self, other: &mut Self) {
        BinomialHeap::swap(self, other)
    }
}
