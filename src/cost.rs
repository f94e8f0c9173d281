use crate::Node;
use std::{fmt::Debug, ops::Add};

/// A policy for the cost of each elementary edit.
///
/// Costs are assumed to be non-negative, with the default value of [Cost::Weight] as _zero_.
pub trait Cost<T: ?Sized> {
    /// The type of the cost of a single edit.
    type Weight: Debug + Default + Copy + Ord + Add<Output = Self::Weight>;

    /// The cost of removing `node` from the source tree.
    fn remove(&self, node: &T) -> Self::Weight;

    /// The cost of inserting `node` from the target tree.
    fn insert(&self, node: &T) -> Self::Weight;

    /// The cost of aligning `a` from the source tree with `b` from the target tree.
    ///
    /// A nonzero cost means `a` needs to be relabeled.
    fn update<'n>(&self, a: &'n T, b: &'n T) -> Self::Weight;
}

/// Every insertion and removal costs 1, and so does relabeling a node to a different [kind].
///
/// Only the [kind] of the nodes is inspected, never the shape of the subtrees below them.
///
/// [kind]: Node::kind
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UnitCost;

impl<T: ?Sized + for<'n> Node<'n>> Cost<T> for UnitCost {
    type Weight = u64;

    #[inline]
    fn remove(&self, _: &T) -> Self::Weight {
        1
    }

    #[inline]
    fn insert(&self, _: &T) -> Self::Weight {
        1
    }

    #[inline]
    fn update<'n>(&self, a: &'n T, b: &'n T) -> Self::Weight {
        if a.kind() == b.kind() {
            0
        } else {
            1
        }
    }
}

/// Insertions and removals cost the [weight] of the node.
///
/// Relabeling a node to a different [kind] costs as much as removing it and inserting the other,
/// so it is never strictly cheaper than doing just that.
///
/// [kind]: Node::kind
/// [weight]: Node::weight
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Weighted;

impl<T, W> Cost<T> for Weighted
where
    T: ?Sized + for<'n> Node<'n, Weight = W>,
    W: Debug + Default + Copy + Ord + Add<Output = W>,
{
    type Weight = W;

    #[inline]
    fn remove(&self, node: &T) -> Self::Weight {
        node.weight()
    }

    #[inline]
    fn insert(&self, node: &T) -> Self::Weight {
        node.weight()
    }

    #[inline]
    fn update<'n>(&self, a: &'n T, b: &'n T) -> Self::Weight {
        if a.kind() == b.kind() {
            W::default()
        } else {
            a.weight() + b.weight()
        }
    }
}
