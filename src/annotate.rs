use crate::Tree;
use itertools::Itertools;
use std::fmt;

/// A flat postorder view over a [Tree], annotated for the Zhang-Shasha algorithm.
///
/// Every node is identified by its postorder id: children are numbered from left to right before
/// their parent, so the root always has the highest id and every descendant of a node has a
/// smaller id than the node itself.
pub struct AnnotatedTree<'t, T> {
    nodes: Box<[&'t T]>,

    /// Postorder id of each node's leftmost leaf descendant.
    lmds: Box<[usize]>,

    /// `{k | there is no k' > k such that lmds[k] == lmds[k']}`, sorted.
    keyroots: Box<[usize]>,
}

impl<'t, T> AnnotatedTree<'t, T>
where
    T: for<'n> Tree<'n>,
{
    /// Annotates the tree rooted at `root`.
    pub fn new(root: &'t T) -> Self {
        // Discovery pass: parents before children, siblings from right to left, which reversed
        // yields the postorder. `parents` is indexed by discovery id.
        let mut stack = vec![(root, None)];
        let mut discovered = Vec::new();
        let mut parents = Vec::new();

        while let Some((node, parent)) = stack.pop() {
            let id = discovered.len();
            discovered.push(node);
            parents.push(parent);

            for c in node.children() {
                stack.push((c, Some(id)));
            }
        }

        let len = discovered.len();
        let mut leftmost = vec![None; len];
        let mut nodes = Vec::with_capacity(len);
        let mut lmds = Vec::with_capacity(len);
        let mut highest = vec![None; len];

        for (i, (id, node)) in discovered.into_iter().enumerate().rev().enumerate() {
            let lmd = match leftmost[id] {
                // Internal node: its leftmost leaf has already been emitted.
                Some(lmd) => lmd,

                // Leaf: claim every ancestor that hasn't been claimed by a leaf further left.
                None => {
                    let mut ancestor = parents[id];
                    while let Some(a) = ancestor {
                        if leftmost[a].is_some() {
                            break;
                        }

                        leftmost[a] = Some(i);
                        ancestor = parents[a];
                    }

                    i
                }
            };

            nodes.push(node);
            lmds.push(lmd);
            highest[lmd] = Some(i);
        }

        let keyroots = highest.into_iter().flatten().sorted().collect();

        AnnotatedTree {
            nodes: nodes.into(),
            lmds: lmds.into(),
            keyroots,
        }
    }
}

impl<'t, T> AnnotatedTree<'t, T> {
    /// The empty tree, which has neither nodes nor keyroots.
    pub fn empty() -> Self {
        AnnotatedTree {
            nodes: Box::default(),
            lmds: Box::default(),
            keyroots: Box::default(),
        }
    }

    /// The number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root, unless the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<&'t T> {
        self.nodes.last().copied()
    }

    /// The nodes in postorder.
    #[inline]
    pub fn nodes(&self) -> &[&'t T] {
        &self.nodes
    }

    /// The node with postorder id `id`.
    ///
    /// # Panics
    ///
    /// If `id` is out of bounds.
    #[inline]
    pub fn node(&self, id: usize) -> &'t T {
        self.nodes[id]
    }

    /// The postorder ids of each node's leftmost leaf descendant.
    #[inline]
    pub fn lmds(&self) -> &[usize] {
        &self.lmds
    }

    /// The postorder id of the leftmost leaf descendant of node `id`.
    ///
    /// # Panics
    ///
    /// If `id` is out of bounds.
    #[inline]
    pub fn lmd(&self, id: usize) -> usize {
        self.lmds[id]
    }

    /// The keyroots in ascending order.
    #[inline]
    pub fn keyroots(&self) -> &[usize] {
        &self.keyroots
    }

    /// The postorder id of `node`, if it belongs to this tree.
    ///
    /// Nodes are compared by identity, not by value.
    pub fn position(&self, node: &T) -> Option<usize> {
        self.nodes.iter().position(|&n| std::ptr::eq(n, node))
    }
}

impl<'t, T> Default for AnnotatedTree<'t, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'t, T> From<Option<&'t T>> for AnnotatedTree<'t, T>
where
    T: for<'n> Tree<'n>,
{
    fn from(root: Option<&'t T>) -> Self {
        root.map_or_else(Self::empty, Self::new)
    }
}

impl<'t, T> Clone for AnnotatedTree<'t, T> {
    fn clone(&self) -> Self {
        AnnotatedTree {
            nodes: self.nodes.clone(),
            lmds: self.lmds.clone(),
            keyroots: self.keyroots.clone(),
        }
    }
}

impl<'t, T: fmt::Debug> fmt::Debug for AnnotatedTree<'t, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatedTree")
            .field("nodes", &self.nodes)
            .field("lmds", &self.lmds)
            .field("keyroots", &self.keyroots)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Labeled, MockTree};
    use std::collections::HashSet;
    use test_strategy::proptest;

    fn leaf(l: &'static str) -> Labeled<&'static str> {
        Labeled::new(l)
    }

    fn labels<'t>(t: &AnnotatedTree<'t, Labeled<&'static str>>) -> Vec<&'static str> {
        t.nodes().iter().map(|n| *n.label()).collect()
    }

    #[test]
    fn annotates_nodes_in_postorder() {
        // f(d(a, c(b)), e)
        let root = Labeled::with_children(
            "f",
            [
                Labeled::with_children("d", [leaf("a"), Labeled::with_children("c", [leaf("b")])]),
                leaf("e"),
            ],
        );

        let t = AnnotatedTree::new(&root);
        assert_eq!(labels(&t), ["a", "b", "c", "d", "e", "f"]);
        assert_eq!(t.lmds(), [0, 1, 1, 0, 4, 0]);
        assert_eq!(t.keyroots(), [2, 4, 5]);
        assert!(std::ptr::eq(t.root().unwrap(), &root));
    }

    #[test]
    fn keyroots_are_sorted_even_when_discovery_order_is_not() {
        // f(c(d(a, b)), e)
        let root = Labeled::with_children(
            "f",
            [
                Labeled::with_children("c", [Labeled::with_children("d", [leaf("a"), leaf("b")])]),
                leaf("e"),
            ],
        );

        let t = AnnotatedTree::new(&root);
        assert_eq!(labels(&t), ["a", "b", "d", "c", "e", "f"]);
        assert_eq!(t.lmds(), [0, 1, 0, 0, 4, 0]);
        assert_eq!(t.keyroots(), [1, 4, 5]);
    }

    #[test]
    fn a_single_node_is_its_own_keyroot() {
        let root = leaf("x");
        let t = AnnotatedTree::new(&root);
        assert_eq!(t.len(), 1);
        assert_eq!(t.lmds(), [0]);
        assert_eq!(t.keyroots(), [0]);
    }

    #[test]
    fn a_left_skewed_tree_has_a_single_keyroot() {
        let root = Labeled::with_children(
            "a",
            [Labeled::with_children("b", [Labeled::with_children("c", [leaf("d")])])],
        );

        let t = AnnotatedTree::new(&root);
        assert_eq!(t.lmds(), [0, 0, 0, 0]);
        assert_eq!(t.keyroots(), [3]);
    }

    #[test]
    fn a_broom_has_one_keyroot_per_leaf() {
        let root = Labeled::with_children("r", [leaf("a"), leaf("b"), leaf("c"), leaf("d")]);

        let t = AnnotatedTree::new(&root);
        assert_eq!(t.lmds(), [0, 1, 2, 3, 0]);
        assert_eq!(t.keyroots(), [1, 2, 3, 4]);
    }

    #[test]
    fn the_empty_tree_has_no_keyroots() {
        let t = AnnotatedTree::<Labeled<&str>>::from(None);
        assert!(t.is_empty());
        assert_eq!(t.root(), None);
        assert!(t.keyroots().is_empty());
    }

    #[test]
    fn positions_are_resolved_by_identity() {
        let root = Labeled::with_children("r", [leaf("a"), leaf("a")]);
        let t = AnnotatedTree::new(&root);

        assert_eq!(t.position(&root.children()[0]), Some(0));
        assert_eq!(t.position(&root.children()[1]), Some(1));
        assert_eq!(t.position(&leaf("a")), None);
    }

    #[proptest]
    fn every_node_is_annotated_once(a: MockTree<u8>) {
        let t = AnnotatedTree::new(&a);
        assert_eq!(t.len(), a.count());
        assert_eq!(t.lmds().len(), t.len());

        let distinct: HashSet<_> = t.nodes().iter().map(|&n| n as *const _).collect();
        assert_eq!(distinct.len(), t.len());
    }

    #[proptest]
    fn descendants_have_smaller_ids(a: MockTree<u8>) {
        let t = AnnotatedTree::new(&a);

        for (i, &n) in t.nodes().iter().enumerate() {
            assert!(t.lmd(i) <= i);

            // The subtree of node i occupies exactly lmd(i)..=i.
            assert_eq!(i - t.lmd(i) + 1, n.count());
            for c in &n.children {
                let j = t.position(c).unwrap();
                assert!(t.lmd(i) <= j && j < i);
            }
        }
    }

    #[proptest]
    fn leftmost_descendants_are_leaves(a: MockTree<u8>) {
        let t = AnnotatedTree::new(&a);

        for (i, &n) in t.nodes().iter().enumerate() {
            let lmd = t.node(t.lmd(i));
            assert!(lmd.children.is_empty());

            let mut first = n;
            while let Some(c) = first.children.first() {
                first = c;
            }

            assert!(std::ptr::eq(first, lmd));
        }
    }

    #[proptest]
    fn keyroots_are_the_highest_node_per_leftmost_descendant(a: MockTree<u8>) {
        let t = AnnotatedTree::new(&a);
        let keyroots = t.keyroots();

        assert_eq!(keyroots.last(), Some(&(t.len() - 1)));
        assert!(keyroots.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(keyroots.len(), a.leaves());

        for &k in keyroots {
            assert!((k + 1..t.len()).all(|j| t.lmd(j) != t.lmd(k)));
        }

        let lmds: HashSet<_> = t.lmds().iter().collect();
        assert_eq!(lmds.len(), keyroots.len());
    }
}
