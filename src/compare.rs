//! Comparators for ordering heap elements
//!
//! Every heap in this crate is a min-heap with respect to a [`Compare`]
//! implementation. The default, [`Natural`], uses the element's [`Ord`]
//! impl. [`Descending`] flips it, turning the heap into a max-heap, and any
//! closure `Fn(&T, &T) -> Ordering` can be injected directly.
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::{BinomialHeap, Descending};
//!
//! let mut heap = BinomialHeap::with_comparator(Descending);
//! heap.push(1);
//! heap.push(7);
//! heap.push(4);
//! assert_eq!(heap.top(), &7);
//!
//! // Order strings by length instead of lexicographically
//! let mut by_len = BinomialHeap::with_comparator(|a: &String, b: &String| a.len().cmp(&b.len()));
//! by_len.push("ccc".to_string());
//! by_len.push("zz".to_string());
//! assert_eq!(by_len.pop().as_deref(), Some("zz"));
//! ```

use std::cmp::Ordering;

/// A strict total order over `T`
///
/// Implementations must be consistent: if `compare(a, b)` is `Less` then
/// `compare(b, a)` is `Greater`, and the relation is transitive. A comparator
/// that violates this does not cause memory unsafety, but the heap may then
/// return elements out of order.
pub trait Compare<T: ?Sized> {
    /// Compares two elements
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    /// Returns true if `lhs` orders strictly before `rhs`
    fn lt(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }
}

/// Orders elements by their [`Ord`] impl (smallest first)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Orders elements by the reverse of their [`Ord`] impl (largest first)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: Ord + ?Sized> Compare<T> for Descending {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        rhs.cmp(lhs)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}
