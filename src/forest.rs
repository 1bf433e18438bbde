//! Forests of binomial trees and the carry-propagating forest merge
//!
//! A forest is a vector of slots indexed by tree order, each holding at most
//! one root. The occupied slots of a forest with n elements are exactly the
//! set bits of n, so merging two forests is binary addition: equal-order
//! trees are linked into a carry for the next order.

use crate::compare::Compare;
use crate::node::{Link, Node};
use log::trace;

/// Slots of binomial tree roots, indexed by order
///
/// The last slot is always occupied (trailing empty slots are trimmed), so
/// an empty forest has no slots at all.
#[derive(Clone)]
pub(crate) struct Forest<T> {
    slots: Vec<Link<T>>,
}

impl<T> Forest<T> {
    pub(crate) const fn new() -> Self {
        Forest { slots: Vec::new() }
    }

    /// A one-element forest: a single order-0 tree
    pub(crate) fn singleton(value: T) -> Self {
        Forest {
            slots: vec![Some(Node::new(value))],
        }
    }

    /// Builds a forest from slots already indexed by order
    pub(crate) fn from_slots(slots: Vec<Link<T>>) -> Self {
        let mut forest = Forest { slots };
        forest.trim();
        forest
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Orders of the occupied slots, ascending
    pub(crate) fn orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(order, slot)| slot.as_ref().map(|_| order))
    }

    /// Value at the root of the order-`order` tree, if that slot is occupied
    pub(crate) fn root(&self, order: usize) -> Option<&T> {
        self.slots.get(order)?.as_deref().map(|node| &node.value)
    }

    /// Finds the slot holding the smallest root
    ///
    /// Empty slots never win. Among equal roots the lowest order is kept,
    /// though callers must not rely on that.
    pub(crate) fn min_order<C: Compare<T>>(&self, cmp: &C) -> Option<usize> {
        let mut best: Option<(usize, &T)> = None;

        for (order, slot) in self.slots.iter().enumerate() {
            let Some(root) = slot else { continue };
            match best {
                Some((_, value)) if !cmp.lt(&root.value, value) => {}
                _ => best = Some((order, &root.value)),
            }
        }

        best.map(|(order, _)| order)
    }

    /// Removes the root of the order-`order` tree and splits it apart
    ///
    /// Returns the root's value and its children as a forest of orders
    /// `0..order`. Panics if the slot is empty.
    pub(crate) fn remove_root(&mut self, order: usize) -> (T, Forest<T>) {
        let root = self.slots[order]
            .take()
            .unwrap_or_else(|| panic!("forest slot {} is empty", order));
        self.trim();

        let (value, children) = root.into_parts();
        debug_assert_eq!(children.len(), order);
        (value, Forest::from_slots(children))
    }

    /// Merges `other` into this forest by carry propagation
    ///
    /// Walks the orders from lowest to highest with at most one carry tree:
    ///
    /// | trees present at this order | output slot | carry     |
    /// |-----------------------------|-------------|-----------|
    /// | none                        | empty       | none      |
    /// | one                         | that tree   | none      |
    /// | two                         | empty       | link(two) |
    /// | lhs, rhs and carry          | carry       | link(lhs, rhs) |
    ///
    /// Stops as soon as `other` is exhausted and nothing is carried, since the
    /// remaining slots of `self` are already in place. O(log n).
    pub(crate) fn merge<C: Compare<T>>(&mut self, other: Forest<T>, cmp: &C) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = other;
            return;
        }

        let mut rhs = other.slots.into_iter();
        let mut carry: Link<T> = None;
        let mut links = 0;
        let mut order = 0;

        loop {
            let incoming = rhs.next();
            if incoming.is_none() && carry.is_none() {
                break;
            }

            if order == self.slots.len() {
                self.slots.push(None);
            }

            let lhs = self.slots[order].take();
            let (out, next) = match (lhs, incoming.flatten(), carry.take()) {
                (None, None, None) => (None, None),
                (Some(tree), None, None) | (None, Some(tree), None) | (None, None, Some(tree)) => {
                    (Some(tree), None)
                }
                (Some(a), Some(b), None) | (Some(a), None, Some(b)) | (None, Some(a), Some(b)) => {
                    links += 1;
                    (None, Some(Node::link(a, b, cmp)))
                }
                (Some(a), Some(b), Some(c)) => {
                    links += 1;
                    (Some(c), Some(Node::link(a, b, cmp)))
                }
            };

            self.slots[order] = out;
            carry = next;
            order += 1;
        }

        self.trim();
        trace!(
            "forest merge: {} links, {} slots in result",
            links,
            self.slots.len()
        );
    }

    /// Drops every tree
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    /// Counts nodes if every tree is well formed and sits in the right slot
    ///
    /// Returns `None` on any violation: a heap-order break, a malformed child
    /// list, a tree in the wrong slot, or a trailing empty slot.
    pub(crate) fn checked_len<C: Compare<T>>(&self, cmp: &C) -> Option<usize> {
        if matches!(self.slots.last(), Some(None)) {
            return None;
        }

        let mut len = 0usize;
        for (order, slot) in self.slots.iter().enumerate() {
            let Some(root) = slot else { continue };
            if root.sibling.is_some() || root.checked_order(cmp)? != order {
                return None;
            }
            len += 1 << order;
        }
        Some(len)
    }

    /// Drops trailing empty slots and returns the node count the occupied
    /// slots imply
    ///
    /// Used after an unwind out of [`merge`](Self::merge): every tree still in
    /// a slot is a complete Bₖ, but some trees may have been dropped and a
    /// trailing empty slot may remain.
    pub(crate) fn recount(&mut self) -> usize {
        self.trim();
        self.orders().map(|order| 1usize << order).sum()
    }

    fn trim(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
    }
}
