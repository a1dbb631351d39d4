//! Depth-first flattening of nested structures.
//!
//! A nested structure is described by the [`Nest`] trait: each node is either
//! a leaf or expands into an iterator of child nodes. [`Flatten`] walks the
//! nodes produced by an outer iterator and yields only the leaves, left to
//! right, descending into children as it meets them.
//!
//! Text is always a leaf. [`Nested<T>`] never looks inside `T`, so a
//! `Nested<&str>` or `Nested<String>` keeps each string whole.
//!
//! ```
//! use seqkit::{flatten, nested};
//!
//! let tree = nested!(["ab", ["cd", ["ef", "gh"]]]);
//! let leaves: Vec<&str> = tree.leaves().collect();
//! assert_eq!(leaves, ["ab", "cd", "ef", "gh"]);
//!
//! let items = vec![nested!(0), nested!([1, [2, 3]])];
//! assert_eq!(flatten(items).collect::<Vec<_>>(), [0, 1, 2, 3]);
//! ```

use std::iter::{Fuse, FusedIterator};

use itertools::Either;

/// A node of a nested structure.
pub trait Nest: Sized {
    /// The value yielded for leaf nodes.
    type Leaf;

    /// The iterator over the children of a branch node.
    type Children: Iterator<Item = Self>;

    /// Consumes the node, returning either its leaf value (`Left`) or an
    /// iterator over its children (`Right`).
    fn expand(self) -> Either<Self::Leaf, Self::Children>;
}

/// An owned tree of values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::List(items.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Returns the leaves of this tree, depth-first.
    pub fn leaves(self) -> Flatten<std::iter::Once<Self>> {
        Flatten::new(std::iter::once(self))
    }
}

impl<T> Nest for Nested<T> {
    type Leaf = T;
    type Children = std::vec::IntoIter<Nested<T>>;

    fn expand(self) -> Either<T, Self::Children> {
        match self {
            Nested::Leaf(value) => Either::Left(value),
            Nested::List(items) => Either::Right(items.into_iter()),
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Nested::list(iter)
    }
}

/// Builds a [`Nested`] value from bracketed literal syntax.
///
/// Square brackets produce lists; anything else is a leaf expression. A leaf
/// that is not a single token tree (e.g. `a + b`) must be parenthesized.
///
/// ```
/// use seqkit::{Nested, nested};
///
/// let tree = nested!([1, [2, 3], []]);
/// assert_eq!(
///     tree,
///     Nested::List(vec![
///         Nested::Leaf(1),
///         Nested::List(vec![Nested::Leaf(2), Nested::Leaf(3)]),
///         Nested::List(vec![]),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! nested {
    ([$($item:tt),* $(,)?]) => {
        $crate::Nested::List(vec![$($crate::nested!($item)),*])
    };
    ($leaf:expr) => {
        $crate::Nested::Leaf($leaf)
    };
}

/// An iterator adapter yielding the leaves of a sequence of nested nodes.
///
/// The traversal keeps an explicit stack of child iterators, so the depth of
/// the structure is not limited by the call stack. The adapter is single-use:
/// once it returns `None` it stays exhausted.
pub struct Flatten<I>
where
    I: Iterator,
    I::Item: Nest,
{
    /// The outer sequence of nodes.
    inner: Fuse<I>,
    /// Children of the branches currently being walked, innermost last.
    stack: Vec<<I::Item as Nest>::Children>,
}

impl<I> Flatten<I>
where
    I: Iterator,
    I::Item: Nest,
{
    pub fn new(inner: I) -> Self {
        Flatten {
            inner: inner.fuse(),
            stack: Vec::new(),
        }
    }

    /// Current nesting depth below the outer sequence.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: Nest,
{
    type Item = <I::Item as Nest>::Leaf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = match self.stack.last_mut() {
                Some(children) => match children.next() {
                    Some(node) => node,
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                None => self.inner.next()?,
            };
            match node.expand() {
                Either::Left(leaf) => return Some(leaf),
                Either::Right(children) => self.stack.push(children),
            }
        }
    }
}

impl<I> FusedIterator for Flatten<I>
where
    I: Iterator,
    I::Item: Nest,
{
}

/// Lazily flattens a sequence of nested nodes into its leaves, depth-first.
pub fn flatten<I>(iterable: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Nest,
{
    Flatten::new(iterable.into_iter())
}
