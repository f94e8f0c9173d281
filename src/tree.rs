use std::ops::Add;

/// An abstraction for a generic tree node.
pub trait Node<'n> {
    /// The type of this [Node]'s [kind][Node::kind].
    ///
    /// Two [Node]s of equal _kind_ can be aligned at no cost, regardless of the shape of the
    /// subtrees below them.
    type Kind: PartialEq;

    /// Returns this [Node]'s _kind_ (i.e. its label).
    fn kind(&'n self) -> Self::Kind;

    /// The type of this [Node]'s [weight][Node::weight].
    ///
    /// The default value of this type is assumed to be the additive identity (i.e. _zero_).
    type Weight: Default + Copy + Ord + Add<Output = Self::Weight>;

    /// Returns the cost of inserting or removing this [Node] alone.
    ///
    /// Only consulted by weight-aware cost policies such as [Weighted][crate::Weighted].
    fn weight(&'n self) -> Self::Weight;
}

/// An abstraction for an ordered tree.
pub trait Tree<'t>: 't + Node<'t> {
    /// A type that can iterate over this [Tree]'s [children][Tree::children].
    type Children: IntoIterator<Item = &'t Self>;

    /// Returns this [Tree]'s immediate children, from left to right.
    fn children(&'t self) -> Self::Children;
}

#[cfg(test)]
mod tests {
    use super::*;
    use derive_more::From;
    use proptest::{collection::vec, prelude::*, strategy::LazyJust};
    use test_strategy::proptest;

    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, From)]
    pub struct Size {
        depth: usize,
        breadth: usize,
    }

    impl Default for Size {
        fn default() -> Self {
            (3, 3).into()
        }
    }

    fn tree<K: 'static + PartialEq + Arbitrary>(size: Size) -> impl Strategy<Value = MockTree<K>> {
        let depth = size.depth as u32;
        let breadth = size.breadth as u32;
        let size = (breadth.pow(depth + 1) - 1) / (breadth - 1) / 2; // half the maximum number of nodes

        (any::<K>(), any::<u8>(), LazyJust::new(Vec::new))
            .prop_map_into()
            .prop_recursive(depth, size, breadth, move |inner| {
                (any::<K>(), any::<u8>(), vec(inner, ..=breadth as usize)).prop_map_into()
            })
    }

    #[derive(Debug, Default, Clone, PartialEq, Eq, Hash, From)]
    pub(crate) struct MockTree<K: PartialEq> {
        pub(crate) kind: K,
        pub(crate) weight: u8,
        pub(crate) children: Vec<Self>,
    }

    impl<K: PartialEq> MockTree<K> {
        pub(crate) fn count(&self) -> usize {
            1 + self.children.iter().map(Self::count).sum::<usize>()
        }

        pub(crate) fn depth(&self) -> usize {
            1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
        }

        pub(crate) fn leaves(&self) -> usize {
            if self.children.is_empty() {
                1
            } else {
                self.children.iter().map(Self::leaves).sum()
            }
        }

        pub(crate) fn total_weight(&self) -> u64 {
            u64::from(self.weight) + self.children.iter().map(Self::total_weight).sum::<u64>()
        }
    }

    /// A small alphabet, so that generated trees share labels often enough to be aligned.
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, test_strategy::Arbitrary)]
    pub(crate) enum Letter {
        A,
        B,
        C,
    }

    impl<K: 'static + PartialEq + Arbitrary> Arbitrary for MockTree<K> {
        type Parameters = Size;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(size: Size) -> Self::Strategy {
            tree(size).boxed()
        }
    }

    impl<'n, K: 'n + PartialEq> Node<'n> for MockTree<K> {
        type Kind = &'n K;
        fn kind(&'n self) -> Self::Kind {
            &self.kind
        }

        type Weight = u64;
        fn weight(&'n self) -> Self::Weight {
            self.weight.into()
        }
    }

    impl<'t, K: 't + PartialEq> Tree<'t> for MockTree<K> {
        type Children = &'t [Self];
        fn children(&'t self) -> Self::Children {
            &self.children
        }
    }

    #[proptest]
    fn children_are_yielded_in_order(t: MockTree<u8>) {
        let kinds: Vec<_> = t.children().into_iter().map(|c| c.kind()).collect();
        let expected: Vec<_> = t.children.iter().map(|c| &c.kind).collect();
        assert_eq!(kinds, expected);
    }

    #[proptest]
    fn generated_trees_respect_the_size_bounds(t: MockTree<()>) {
        let Size { depth, breadth } = Size::default();
        assert!(t.depth() <= depth + 1);
        assert!(t.children.len() <= breadth);
        assert!(t.leaves() <= t.count());
    }
}

#[cfg(test)]
pub(crate) use tests::{Letter, MockTree};
