//! Arena-backed binomial heap (experimental)
//!
//! Same algorithms as [`BinomialHeap`](crate::binomial::BinomialHeap), but
//! nodes live in a [`SlotMap`] and link to each other through generational
//! keys instead of boxes. Freed slots are recycled by the slotmap's free list,
//! so a heap under steady push/pop churn stops allocating.
//!
//! # Trade-offs
//!
//! - Contiguous node storage and no per-node allocation
//! - `merge` has to move the smaller heap's nodes into the larger heap's
//!   arena, so it costs O(min(n, m)) on top of the O(log n) carry loop
//!
//! # Feature Flag
//! Requires the `arena-storage` feature to be enabled.
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::arena::ArenaBinomialHeap;
//!
//! let mut heap = ArenaBinomialHeap::new();
//! heap.push(4);
//! heap.push(2);
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.len(), 1);
//! ```

use crate::compare::{Compare, Natural};
use crate::traits::{Heap, HeapError, MergeableHeap};
use log::{trace, warn};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use std::fmt;
use std::mem;
use std::thread;

new_key_type! {
    /// Key of a node in a heap's arena
    struct NodeKey;
}

/// Arena node; `child` is the highest-order child, `sibling` the next lower one
#[derive(Clone)]
struct ArenaNode<T> {
    value: T,
    child: Option<NodeKey>,
    sibling: Option<NodeKey>,
}

/// A binomial min-heap whose nodes are stored in a slotmap arena
#[derive(Clone)]
pub struct ArenaBinomialHeap<T, C = Natural> {
    nodes: SlotMap<NodeKey, ArenaNode<T>>,
    /// Roots indexed by order; no trailing empty slots
    trees: Vec<Option<NodeKey>>,
    cmp: C,
}

/// Drops nodes orphaned by a comparator panic while the forest is rebuilt
struct PruneOnUnwind<'a, T, C> {
    heap: &'a mut ArenaBinomialHeap<T, C>,
}

impl<T, C> Drop for PruneOnUnwind<'_, T, C> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.heap.prune_unreachable();
        }
    }
}

impl<T: Ord> ArenaBinomialHeap<T> {
    /// Creates an empty heap ordered by `T`'s [`Ord`] impl
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C: Compare<T>> ArenaBinomialHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        ArenaBinomialHeap {
            nodes: SlotMap::with_key(),
            trees: Vec::new(),
            cmp,
        }
    }

    /// Returns the number of elements in the heap
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the heap holds no elements
    #[doc(alias = "empty")]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts an element. O(1) amortized, O(log n) worst-case.
    pub fn push(&mut self, value: T) {
        let key = self.nodes.insert(ArenaNode {
            value,
            child: None,
            sibling: None,
        });
        self.merge_trees(vec![Some(key)]);
    }

    /// Returns the minimum element
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn top(&self) -> &T {
        match self.peek() {
            Some(value) => value,
            None => panic!("top() called on an empty ArenaBinomialHeap"),
        }
    }

    /// Returns the minimum element, or [`HeapError::Empty`]
    pub fn try_top(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Returns the minimum element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        let order = self.min_order()?;
        let key = self.trees[order]?;
        Some(&self.nodes[key].value)
    }

    /// Removes and returns the minimum element
    pub fn pop(&mut self) -> Option<T> {
        let order = self.min_order()?;
        let root = self.trees[order].take()?;
        self.trim();

        let node = self.nodes.remove(root)?;
        let mut children = Vec::with_capacity(order);
        let mut next = node.child;
        while let Some(key) = next {
            next = self.nodes[key].sibling.take();
            children.push(Some(key));
        }
        children.reverse();
        trace!("arena pop: order-{} root, {} children", order, children.len());

        self.merge_trees(children);
        Some(node.value)
    }

    /// Removes and returns the minimum element, or [`HeapError::Empty`]
    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// **Time Complexity**: O(min(n, m) + log(n + m)), not the O(log n) of
    /// [`BinomialHeap::merge`](crate::BinomialHeap::merge)
    ///
    /// Nodes cannot be shared between two slotmaps, so the smaller arena's
    /// nodes are re-inserted into the larger one before the forests are
    /// merged. Prefer [`BinomialHeap`](crate::BinomialHeap) when merging two
    /// large heaps is on the hot path.
    ///
    /// If the comparator panics, `other` is left empty and nodes cut loose
    /// from the forest are removed, so [`len`](Self::len) stays accurate.
    pub fn merge(&mut self, other: &mut Self) {
        if self.nodes.len() < other.nodes.len() {
            mem::swap(&mut self.nodes, &mut other.nodes);
            mem::swap(&mut self.trees, &mut other.trees);
        }

        let mut source = mem::replace(&mut other.nodes, SlotMap::with_key());
        let trees = mem::take(&mut other.trees);
        trace!("arena merge: moving {} nodes", source.len());

        let moved = trees
            .into_iter()
            .map(|root| root.map(|key| self.adopt(&mut source, key)))
            .collect();
        self.merge_trees(moved);
    }

    /// Exchanges the contents (and comparators) of two heaps in O(1)
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.trees.clear();
    }

    /// Orders of the binomial trees currently in the forest, ascending
    pub fn occupied_orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.trees
            .iter()
            .enumerate()
            .filter_map(|(order, slot)| slot.map(|_| order))
    }

    /// Checks heap order, tree shapes, slot placement and the node count
    pub fn verify_structure(&self) -> bool {
        if matches!(self.trees.last(), Some(None)) {
            return false;
        }

        let mut count = 0usize;
        for (order, slot) in self.trees.iter().enumerate() {
            let Some(root) = *slot else { continue };
            if self.nodes[root].sibling.is_some() || self.checked_order(root) != Some(order) {
                return false;
            }
            count += 1 << order;
        }
        count == self.nodes.len()
    }

    fn checked_order(&self, key: NodeKey) -> Option<usize> {
        let node = self.nodes.get(key)?;
        let mut orders = Vec::new();
        let mut next = node.child;
        while let Some(child) = next {
            let child_node = self.nodes.get(child)?;
            if self.cmp.lt(&child_node.value, &node.value) {
                return None;
            }
            orders.push(self.checked_order(child)?);
            next = child_node.sibling;
        }

        let k = orders.len();
        orders
            .iter()
            .enumerate()
            .all(|(i, &order)| order == k - 1 - i)
            .then_some(k)
    }

    /// Moves the tree rooted at `key` from `source` into this arena
    fn adopt(&mut self, source: &mut SlotMap<NodeKey, ArenaNode<T>>, key: NodeKey) -> NodeKey {
        let node = source
            .remove(key)
            .expect("tree links only point at live nodes");
        let child = node.child.map(|c| self.adopt(source, c));
        let sibling = node.sibling.map(|s| self.adopt(source, s));
        self.nodes.insert(ArenaNode {
            value: node.value,
            child,
            sibling,
        })
    }

    fn min_order(&self) -> Option<usize> {
        let mut best: Option<(usize, &T)> = None;
        for (order, slot) in self.trees.iter().enumerate() {
            let Some(key) = *slot else { continue };
            let value = &self.nodes[key].value;
            match best {
                Some((_, min)) if !self.cmp.lt(value, min) => {}
                _ => best = Some((order, value)),
            }
        }
        best.map(|(order, _)| order)
    }

    /// Links two equal-order roots; ties keep `lhs` as the root
    fn link(&mut self, mut lhs: NodeKey, mut rhs: NodeKey) -> NodeKey {
        if self.cmp.lt(&self.nodes[rhs].value, &self.nodes[lhs].value) {
            mem::swap(&mut lhs, &mut rhs);
        }
        let first = self.nodes[lhs].child.replace(rhs);
        self.nodes[rhs].sibling = first;
        lhs
    }

    /// Carry-propagating merge of a forest (roots indexed by order) into `trees`
    ///
    /// If the comparator panics, nodes no longer reachable from `trees` are
    /// removed from the arena so `len` keeps matching the forest.
    fn merge_trees(&mut self, other: Vec<Option<NodeKey>>) {
        let guard = PruneOnUnwind { heap: self };
        guard.heap.add_trees(other);
    }

    fn add_trees(&mut self, other: Vec<Option<NodeKey>>) {
        let mut rhs = other.into_iter();
        let mut carry: Option<NodeKey> = None;
        let mut order = 0;

        loop {
            let incoming = rhs.next();
            if incoming.is_none() && carry.is_none() {
                break;
            }
            if order == self.trees.len() {
                self.trees.push(None);
            }

            let lhs = self.trees[order].take();
            let (out, next) = match (lhs, incoming.flatten(), carry.take()) {
                (None, None, None) => (None, None),
                (Some(tree), None, None) | (None, Some(tree), None) | (None, None, Some(tree)) => {
                    (Some(tree), None)
                }
                (Some(a), Some(b), None) | (Some(a), None, Some(b)) | (None, Some(a), Some(b)) => {
                    (None, Some(self.link(a, b)))
                }
                (Some(a), Some(b), Some(c)) => (Some(c), Some(self.link(a, b))),
            };

            self.trees[order] = out;
            carry = next;
            order += 1;
        }

        self.trim();
    }
}

impl<T, C> ArenaBinomialHeap<T, C> {
    fn trim(&mut self) {
        while matches!(self.trees.last(), Some(None)) {
            self.trees.pop();
        }
    }

    /// Removes every node that no root in `trees` reaches, then trims
    fn prune_unreachable(&mut self) {
        let mut reachable = SecondaryMap::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeKey> = self.trees.iter().flatten().copied().collect();
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else { continue };
            if reachable.insert(key, ()).is_none() {
                stack.extend(node.child);
                stack.extend(node.sibling);
            }
        }

        let before = self.nodes.len();
        self.nodes.retain(|key, _| reachable.contains_key(key));
        self.trim();
        warn!(
            "comparator panicked mid-update: {} of {} arena nodes kept",
            self.nodes.len(),
            before
        );
    }
}

impl<T: Ord> Default for ArenaBinomialHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for ArenaBinomialHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orders: Vec<usize> = self
            .trees
            .iter()
            .enumerate()
            .filter_map(|(order, slot)| slot.map(|_| order))
            .collect();
        f.debug_struct("ArenaBinomialHeap")
            .field("len", &self.nodes.len())
            .field("orders", &orders)
            .finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for ArenaBinomialHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for ArenaBinomialHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = ArenaBinomialHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for ArenaBinomialHeap<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, item: T) {
        ArenaBinomialHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        ArenaBinomialHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        ArenaBinomialHeap::pop(self)
    }
}

impl<T, C: Compare<T> + Default> MergeableHeap<T> for ArenaBinomialHeap<T, C> {
    fn merge(&mut self, other: &mut Self) {
        ArenaBinomialHeap::merge(self, other)
    }

    fn swap(&mut self, other: &mut Self) {
        ArenaBinomialHeap::swap(self, other)
    }
}
