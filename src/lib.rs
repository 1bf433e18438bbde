//! Binomial Heaps for Rust
//!
//! This crate provides a mergeable min-priority queue backed by a forest of
//! binomial trees, with the costs you would expect from the textbook structure:
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(1) amortized, O(log n) worst |
//! | `top` / `peek` | O(log n) |
//! | `pop`     | O(log n)   |
//! | `merge`   | O(log n)   |
//! | `len` / `is_empty` / `swap` | O(1) |
//!
//! - [`BinomialHeap`]: nodes are singly owned boxes linked child/sibling
//! - [`arena::ArenaBinomialHeap`]: the same heap with nodes in a `slotmap`
//!   arena (requires the `arena-storage` feature)
//!
//! Elements are ordered by a [`Compare`] implementation: [`Natural`] (the
//! default, smallest first), [`Descending`], or any closure.
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::BinomialHeap;
//!
//! let mut a = BinomialHeap::new();
//! a.push(2);
//! a.push(4);
//!
//! let mut b = BinomialHeap::new();
//! b.push(1);
//! b.push(3);
//!
//! a.merge(&mut b);
//! assert!(b.is_empty());
//! assert_eq!(a.into_sorted_vec(), vec![1, 2, 3, 4]);
//! ```

#[cfg(feature = "arena-storage")]
pub mod arena;
pub mod binomial;
pub mod compare;
mod forest;
mod node;
pub mod traits;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use compare::{Compare, Descending, Natural};
pub use traits::{Heap, HeapError, MergeableHeap};
