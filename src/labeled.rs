use crate::{Node, Tree};
use derive_more::From;
use std::fmt::{self, Display};

/// An ordered tree of labeled nodes, each of which owns its children.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::Labeled;
///
/// let tree = Labeled::new("f")
///     .with_child(Labeled::new("d").with_child(Labeled::new("a")))
///     .with_child(Labeled::new("e"));
///
/// assert_eq!(tree.to_string(), "f(d(a), e)");
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, From)]
pub struct Labeled<L> {
    label: L,
    children: Vec<Self>,
}

impl<L> Labeled<L> {
    /// A leaf with the given label.
    pub fn new(label: L) -> Self {
        Labeled {
            label,
            children: Vec::new(),
        }
    }

    /// A node with the given label and children, from left to right.
    pub fn with_children<I: IntoIterator<Item = Self>>(label: L, children: I) -> Self {
        Labeled {
            label,
            children: children.into_iter().collect(),
        }
    }

    /// Appends `child` as the rightmost child and returns the node.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends `child` as the rightmost child.
    pub fn push(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        self
    }

    /// This node's label.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// This node's children, from left to right.
    pub fn children(&self) -> &[Self] {
        &self.children
    }
}

impl<'n, L: 'n + PartialEq> Node<'n> for Labeled<L> {
    type Kind = &'n L;

    #[inline]
    fn kind(&'n self) -> Self::Kind {
        &self.label
    }

    type Weight = u64;

    #[inline]
    fn weight(&'n self) -> Self::Weight {
        1
    }
}

impl<'t, L: 't + PartialEq> Tree<'t> for Labeled<L> {
    type Children = &'t [Self];

    #[inline]
    fn children(&'t self) -> Self::Children {
        &self.children
    }
}

impl<L: Display> Display for Labeled<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;

        if let Some((first, rest)) = self.children.split_first() {
            write!(f, "({first}")?;
            for c in rest {
                write!(f, ", {c}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}
