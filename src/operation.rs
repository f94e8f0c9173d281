use crate::{Cost, Node};
use std::fmt::{self, Debug, Display};
use std::ptr;

/// The kind of an [Operation].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum OperationKind {
    Remove,
    Insert,
    Update,
    Match,
}

/// A single step of an edit script between two trees.
///
/// Nodes are borrowed from the trees being compared, so two [Operation]s are only equal if they
/// refer to the very same nodes.
pub enum Operation<'t, T> {
    /// Remove the node from the source tree, splicing its children into its parent.
    Remove(&'t T),

    /// Insert the node from the target tree.
    Insert(&'t T),

    /// Relabel the node from the source tree (left) as the node from the target tree (right).
    Update(&'t T, &'t T),

    /// Align the node from the source tree (left) with an identically labeled node from the
    /// target tree (right).
    Match(&'t T, &'t T),
}

impl<'t, T> Operation<'t, T> {
    #[inline]
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Remove(_) => OperationKind::Remove,
            Operation::Insert(_) => OperationKind::Insert,
            Operation::Update(..) => OperationKind::Update,
            Operation::Match(..) => OperationKind::Match,
        }
    }

    /// The node from the source tree, absent for [Operation::Insert].
    #[inline]
    pub fn source(&self) -> Option<&'t T> {
        match *self {
            Operation::Remove(a) | Operation::Update(a, _) | Operation::Match(a, _) => Some(a),
            Operation::Insert(_) => None,
        }
    }

    /// The node from the target tree, absent for [Operation::Remove].
    #[inline]
    pub fn target(&self) -> Option<&'t T> {
        match *self {
            Operation::Insert(b) | Operation::Update(_, b) | Operation::Match(_, b) => Some(b),
            Operation::Remove(_) => None,
        }
    }

    /// What `policy` charges for this [Operation] alone.
    pub fn cost<C: Cost<T>>(&self, policy: &C) -> C::Weight {
        match *self {
            Operation::Remove(a) => policy.remove(a),
            Operation::Insert(b) => policy.insert(b),
            Operation::Update(a, b) => policy.update(a, b),
            Operation::Match(..) => C::Weight::default(),
        }
    }
}

impl<'t, T> Clone for Operation<'t, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, T> Copy for Operation<'t, T> {}

impl<'t, T> PartialEq for Operation<'t, T> {
    fn eq(&self, other: &Self) -> bool {
        let same = |a: Option<&T>, b: Option<&T>| match (a, b) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };

        self.kind() == other.kind()
            && same(self.source(), other.source())
            && same(self.target(), other.target())
    }
}

impl<'t, T> Eq for Operation<'t, T> {}

impl<'t, T: Debug> Debug for Operation<'t, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Remove(a) => f.debug_tuple("Remove").field(a).finish(),
            Operation::Insert(b) => f.debug_tuple("Insert").field(b).finish(),
            Operation::Update(a, b) => f.debug_tuple("Update").field(a).field(b).finish(),
            Operation::Match(a, b) => f.debug_tuple("Match").field(a).field(b).finish(),
        }
    }
}

impl<'t, T> Display for Operation<'t, T>
where
    T: for<'n> Node<'n>,
    for<'n> <T as Node<'n>>::Kind: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operation::Remove(a) => write!(f, "remove {}", a.kind()),
            Operation::Insert(b) => write!(f, "insert {}", b.kind()),
            Operation::Update(a, b) => write!(f, "update {} -> {}", a.kind(), b.kind()),
            Operation::Match(a, b) => write!(f, "match {} = {}", a.kind(), b.kind()),
        }
    }
}
