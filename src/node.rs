//! Binomial tree nodes and the O(1) tree link
//!
//! Trees use the left-child/right-sibling layout with single ownership:
//! a node owns its first child through `child`, and each child owns the next
//! one through `sibling`. A root of order k therefore reaches exactly k
//! children by following `child` once and then `sibling` repeatedly, and those
//! children have orders k-1, k-2, ..., 0 in that order.

use crate::compare::Compare;

/// Owned link to a node; `None` terminates a chain
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node in a binomial tree
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// Leftmost (highest-order) child
    pub(crate) child: Link<T>,
    /// Next lower-order sibling in the parent's child list
    pub(crate) sibling: Link<T>,
}

impl<T> Node<T> {
    /// Creates an order-0 tree holding `value`
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            child: None,
            sibling: None,
        })
    }

    /// Links two heap-ordered trees of equal order into one tree of the next order
    ///
    /// The root with the strictly smaller value wins; on a tie `lhs` stays the
    /// root. The losing root becomes the winner's new leftmost child, so the
    /// child list stays sorted by descending order. No allocation happens and
    /// nothing is traversed.
    pub(crate) fn link<C: Compare<T>>(
        mut lhs: Box<Self>,
        mut rhs: Box<Self>,
        cmp: &C,
    ) -> Box<Self> {
        debug_assert!(lhs.sibling.is_none() && rhs.sibling.is_none());

        if cmp.lt(&rhs.value, &lhs.value) {
            std::mem::swap(&mut lhs, &mut rhs);
        }

        rhs.sibling = lhs.child.take();
        lhs.child = Some(rhs);
        lhs
    }

    /// Destroys a root, returning its value and its children as independent trees
    ///
    /// The children come back in ascending order, so slot `i` of the returned
    /// vector holds the order-`i` subtree and every slot is occupied.
    pub(crate) fn into_parts(self: Box<Self>) -> (T, Vec<Link<T>>) {
        let Node { value, child, .. } = *self;

        let mut children = Vec::new();
        let mut next = child;
        while let Some(mut node) = next {
            next = node.sibling.take();
            children.push(Some(node));
        }

        // Child lists run from highest order to lowest
        children.reverse();

        (value, children)
    }

    /// Returns the order of this tree if it is a well-formed binomial tree
    ///
    /// Checks the child-order layout and the heap-order property over the
    /// whole subtree. Used by the structural validators only.
    pub(crate) fn checked_order<C: Compare<T>>(&self, cmp: &C) -> Option<usize> {
        let mut orders = Vec::new();
        let mut next = self.child.as_deref();
        while let Some(child) = next {
            if cmp.lt(&child.value, &self.value) {
                return None;
            }
            orders.push(child.checked_order(cmp)?);
            next = child.sibling.as_deref();
        }

        // k children with orders k-1, k-2, ..., 0
        let k = orders.len();
        orders
            .iter()
            .enumerate()
            .all(|(i, &order)| order == k - 1 - i)
            .then_some(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;

    fn pair(a: i32, b: i32) -> Box<Node<i32>> {
        Node::link(Node::new(a), Node::new(b), &Natural)
    }

    #[test]
    fn test_link_smaller_root_wins() {
        let tree = Node::link(Node::new(5), Node::new(2), &Natural);
        assert_eq!(tree.value, 2);
        assert_eq!(tree.child.as_ref().map(|c| c.value), Some(5));
        assert_eq!(tree.checked_order(&Natural), Some(1));
    }

    #[test]
    fn test_link_tie_keeps_left_root() {
        let lhs = Node::new((1, "left"));
        let rhs = Node::new((1, "right"));
        let by_key = |a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0);

        let tree = Node::link(lhs, rhs, &by_key);
        assert_eq!(tree.value.1, "left");
        assert_eq!(tree.child.as_ref().map(|c| c.value.1), Some("right"));
    }

    #[test]
    fn test_link_places_loser_as_leftmost_child() {
        // Two order-1 trees: (1 -> 4) and (3 -> 7)
        let tree = Node::link(pair(1, 4), pair(3, 7), &Natural);

        assert_eq!(tree.value, 1);
        let first = tree.child.as_ref().unwrap();
        assert_eq!(first.value, 3);
        assert_eq!(first.child.as_ref().map(|c| c.value), Some(7));
        assert_eq!(first.sibling.as_ref().map(|c| c.value), Some(4));
        assert_eq!(tree.checked_order(&Natural), Some(2));
    }

    #[test]
    fn test_into_parts_returns_ascending_children() {
        let tree = Node::link(
            Node::link(pair(0, 1), pair(2, 3), &Natural),
            Node::link(pair(4, 5), pair(6, 7), &Natural),
            &Natural,
        );
        assert_eq!(tree.checked_order(&Natural), Some(3));

        let (value, children) = tree.into_parts();
        assert_eq!(value, 0);
        assert_eq!(children.len(), 3);
        for (order, child) in children.iter().enumerate() {
            let child = child.as_ref().unwrap();
            assert!(child.sibling.is_none());
            assert_eq!(child.checked_order(&Natural), Some(order));
        }
    }

    #[test]
    fn test_checked_order_rejects_heap_violation() {
        let mut tree = pair(1, 2);
        tree.value = 10;
        assert_eq!(tree.checked_order(&Natural), None);
    }
}
