use crate::{AnnotatedTree, Cost, Operation, Tree, UnitCost};
use itertools::iproduct;
use pathfinding::matrix::Matrix;
use tracing::{debug, debug_span, trace};

/// The distance and edit script between every pair of subtrees, indexed by postorder ids.
struct Tables<'t, T, W> {
    dists: Matrix<W>,
    scripts: Matrix<Vec<Operation<'t, T>>>,
}

/// The winner of a single step of the recurrence.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Choice {
    Remove,
    Insert,
    Align,
}

/// Ties favor removal over insertion, while alignment must be strictly cheaper than both.
#[inline]
fn choose<W: Ord>(remove: W, insert: W, align: W) -> (W, Choice) {
    let (best, choice) = if remove <= insert {
        (remove, Choice::Remove)
    } else {
        (insert, Choice::Insert)
    };

    if align < best {
        (align, Choice::Align)
    } else {
        (best, choice)
    }
}

#[inline]
fn extended<'t, T>(script: &[Operation<'t, T>], op: Operation<'t, T>) -> Vec<Operation<'t, T>> {
    let mut script = Vec::from(script);
    script.push(op);
    script
}

/// Computes the distance between the forests below keyroots `i` of `a` and `j` of `b`.
///
/// Every pair of subtrees whose leftmost leaves coincide with those of `i` and `j` respectively is
/// finalized in `tables`. Every other pair of subtrees within the two forests is read from
/// `tables`, which must have been finalized by an earlier pair of keyroots.
fn forest_distance<'t, T, C: Cost<T>>(
    a: &AnnotatedTree<'t, T>,
    b: &AnnotatedTree<'t, T>,
    cost: &C,
    tables: &mut Tables<'t, T, C::Weight>,
    i: usize,
    j: usize,
) {
    let (al, bl) = (a.lmds(), b.lmds());
    let (an, bn) = (a.nodes(), b.nodes());

    // Row x stands for the forest al[i]..al[i] + x, so node x - 1 + al[i] is its rightmost root.
    // Likewise for columns.
    let (li, lj) = (al[i], bl[j]);
    let m = i - li + 2;
    let n = j - lj + 2;

    trace!(i, j, rows = m, columns = n, "forest distance");

    let mut fd = Matrix::new(m, n, C::Weight::default());
    let mut ops: Matrix<Vec<Operation<'t, T>>> = Matrix::new(m, n, Vec::new());

    for x in 1..m {
        let u = an[x - 1 + li];
        fd[(x, 0)] = fd[(x - 1, 0)] + cost.remove(u);
        ops[(x, 0)] = extended(&ops[(x - 1, 0)], Operation::Remove(u));
    }

    for y in 1..n {
        let v = bn[y - 1 + lj];
        fd[(0, y)] = fd[(0, y - 1)] + cost.insert(v);
        ops[(0, y)] = extended(&ops[(0, y - 1)], Operation::Insert(v));
    }

    for x in 1..m {
        for y in 1..n {
            let (g, h) = (x - 1 + li, y - 1 + lj);
            let (u, v) = (an[g], bn[h]);

            let remove = fd[(x - 1, y)] + cost.remove(u);
            let insert = fd[(x, y - 1)] + cost.insert(v);

            if al[g] == li && bl[h] == lj {
                // Both forests are whole trees, rooted at g and h.
                let update = cost.update(u, v);
                let (d, choice) = choose(remove, insert, fd[(x - 1, y - 1)] + update);

                let script = match choice {
                    Choice::Remove => extended(&ops[(x - 1, y)], Operation::Remove(u)),
                    Choice::Insert => extended(&ops[(x, y - 1)], Operation::Insert(v)),
                    Choice::Align if update != C::Weight::default() => {
                        extended(&ops[(x - 1, y - 1)], Operation::Update(u, v))
                    }
                    Choice::Align => extended(&ops[(x - 1, y - 1)], Operation::Match(u, v)),
                };

                fd[(x, y)] = d;
                tables.dists[(g, h)] = d;
                tables.scripts[(g, h)] = script.clone();
                ops[(x, y)] = script;
            } else {
                // The forests end in the subtrees rooted at g and h, which start at rows p + 1
                // and columns q + 1.
                debug_assert!(al[g] >= li && bl[h] >= lj, "subtree escapes the forest");
                let p = al[g] - li;
                let q = bl[h] - lj;

                let (d, choice) = choose(remove, insert, fd[(p, q)] + tables.dists[(g, h)]);

                let script = match choice {
                    Choice::Remove => extended(&ops[(x - 1, y)], Operation::Remove(u)),
                    Choice::Insert => extended(&ops[(x, y - 1)], Operation::Insert(v)),
                    Choice::Align => {
                        let mut script = ops[(p, q)].clone();
                        script.extend_from_slice(&tables.scripts[(g, h)]);
                        script
                    }
                };

                fd[(x, y)] = d;
                ops[(x, y)] = script;
            }
        }
    }
}

/// The [Zhang-Shasha] tree edit distance between two ordered trees.
///
/// All pairwise subtree distances are computed eagerly on construction, along with an edit script
/// for each of them. The edit script for the whole trees lists [Operation]s in the order the
/// dynamic program settles them, which is not necessarily the document order of either tree.
///
/// [Zhang-Shasha]: https://doi.org/10.1137/0218082
pub struct ZhangShasha<'t, T, C: Cost<T> = UnitCost> {
    a: AnnotatedTree<'t, T>,
    b: AnnotatedTree<'t, T>,
    cost: C,
    tables: Tables<'t, T, C::Weight>,
    distance: C::Weight,
    script: Box<[Operation<'t, T>]>,
}

impl<'t, T> ZhangShasha<'t, T, UnitCost>
where
    T: for<'n> Tree<'n>,
{
    /// Compares `a` against `b` with [UnitCost].
    pub fn new(a: &'t T, b: &'t T) -> Self {
        Self::with_cost(a, b, UnitCost)
    }
}

impl<'t, T, C> ZhangShasha<'t, T, C>
where
    T: for<'n> Tree<'n>,
    C: Cost<T>,
{
    /// Compares `a` against `b` according to the given cost policy.
    pub fn with_cost(a: &'t T, b: &'t T, cost: C) -> Self {
        Self::from_annotated(AnnotatedTree::new(a), AnnotatedTree::new(b), cost)
    }
}

impl<'t, T, C: Cost<T>> ZhangShasha<'t, T, C> {
    /// Compares two annotated trees, either of which may be [empty][AnnotatedTree::empty].
    pub fn from_annotated(a: AnnotatedTree<'t, T>, b: AnnotatedTree<'t, T>, cost: C) -> Self {
        let span = debug_span!(
            "zhang_shasha",
            a = a.len(),
            b = b.len(),
            a_keyroots = a.keyroots().len(),
            b_keyroots = b.keyroots().len(),
        );

        let _guard = span.enter();

        // A matrix can't have empty rows, and there are no subtree pairs anyway.
        let (rows, columns) = if a.is_empty() || b.is_empty() {
            (0, 0)
        } else {
            (a.len(), b.len())
        };

        let mut tables = Tables {
            dists: Matrix::new(rows, columns, C::Weight::default()),
            scripts: Matrix::new(rows, columns, Vec::new()),
        };

        for (&i, &j) in iproduct!(a.keyroots(), b.keyroots()) {
            forest_distance(&a, &b, &cost, &mut tables, i, j);
        }

        let (distance, script): (_, Box<[_]>) = match (a.len(), b.len()) {
            (0, _) => (
                b.nodes().iter().fold(C::Weight::default(), |d, &v| d + cost.insert(v)),
                b.nodes().iter().map(|&v| Operation::Insert(v)).collect(),
            ),

            (_, 0) => (
                a.nodes().iter().fold(C::Weight::default(), |d, &u| d + cost.remove(u)),
                a.nodes().iter().map(|&u| Operation::Remove(u)).collect(),
            ),

            (m, n) => (
                tables.dists[(m - 1, n - 1)],
                tables.scripts[(m - 1, n - 1)].as_slice().into(),
            ),
        };

        debug!(?distance, edits = script.len(), "compared");

        ZhangShasha {
            a,
            b,
            cost,
            tables,
            distance,
            script,
        }
    }

    /// The edit distance between the two trees.
    #[inline]
    pub fn distance(&self) -> C::Weight {
        self.distance
    }

    /// A lowest cost sequence of [Operation]s that transforms the source tree into the target.
    #[inline]
    pub fn edit_script(&self) -> &[Operation<'t, T>] {
        &self.script
    }

    /// Consumes the comparison, returning the edit script and the distance.
    pub fn into_parts(self) -> (Box<[Operation<'t, T>]>, C::Weight) {
        (self.script, self.distance)
    }

    /// The source tree.
    #[inline]
    pub fn source(&self) -> &AnnotatedTree<'t, T> {
        &self.a
    }

    /// The target tree.
    #[inline]
    pub fn target(&self) -> &AnnotatedTree<'t, T> {
        &self.b
    }

    /// The cost policy.
    #[inline]
    pub fn cost(&self) -> &C {
        &self.cost
    }

    /// The edit distance between the subtree rooted at postorder id `i` of the source tree and
    /// the subtree rooted at postorder id `j` of the target tree.
    ///
    /// # Panics
    ///
    /// If either id is out of bounds.
    #[inline]
    pub fn subtree_distance(&self, i: usize, j: usize) -> C::Weight {
        self.tables.dists[(i, j)]
    }

    /// A lowest cost edit script between the subtrees rooted at postorder ids `i` and `j`.
    ///
    /// # Panics
    ///
    /// If either id is out of bounds.
    #[inline]
    pub fn subtree_edit_script(&self, i: usize, j: usize) -> &[Operation<'t, T>] {
        &self.tables.scripts[(i, j)]
    }
}

/// Finds a lowest cost sequence of [Operation]s that transforms one [Tree] into the other,
/// charging 1 for each insertion, removal or relabeling.
///
/// The sequence of [Operation]s is understood to apply to the left-hand side so it becomes the
/// right-hand side.
pub fn diff<'t, T>(a: &'t T, b: &'t T) -> (Box<[Operation<'t, T>]>, u64)
where
    T: for<'n> Tree<'n>,
{
    ZhangShasha::new(a, b).into_parts()
}
