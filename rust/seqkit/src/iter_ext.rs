//! Method-call forms of the sequence operations.

use std::fmt;
use std::hash::Hash;

use seqkit_common::Result;

use crate::chunk::{ArrayChunks, Chunks};
use crate::flatten::{Flatten, Nest};
use crate::group::{Groups, Lookup};

/// Extension trait exposing the free functions of this crate as iterator
/// methods.
///
/// ```
/// use seqkit::{SeqIteratorsExt, nested};
///
/// let leaves: Vec<i32> = vec![nested!([1, [2]]), nested!(3)]
///     .into_iter()
///     .flatten_leaves()
///     .collect();
/// assert_eq!(leaves, [1, 2, 3]);
///
/// let chunks: Vec<_> = (0..3).padded_chunks(2).unwrap().collect();
/// assert_eq!(chunks, [vec![Some(0), Some(1)], vec![Some(2), None]]);
/// ```
pub trait SeqIteratorsExt: Iterator + Sized {
    /// Lazily yields the leaves of the nested nodes produced by this iterator.
    fn flatten_leaves(self) -> Flatten<Self>
    where
        Self::Item: Nest,
    {
        Flatten::new(self)
    }

    /// Splits this iterator into `Vec` chunks of exactly `size` cells.
    ///
    /// Fails if `size` is 0.
    fn padded_chunks(self, size: usize) -> Result<Chunks<Self>> {
        Chunks::new(self, size)
    }

    /// Splits this iterator into `[Option<T>; N]` chunks.
    ///
    /// Fails if `N` is 0.
    fn padded_array_chunks<const N: usize>(self) -> Result<ArrayChunks<Self, N>> {
        ArrayChunks::new(self)
    }

    /// Collects the unique elements in first-occurrence order.
    fn distinct_items(self) -> Vec<Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
    {
        crate::distinct::distinct(self)
    }

    /// Groups the elements by the value each one holds under `key`.
    fn group_items_by<Q>(
        self,
        key: &Q,
    ) -> Result<Groups<<Self::Item as Lookup<Q>>::Value, Self::Item>>
    where
        Q: fmt::Display + ?Sized,
        Self::Item: Lookup<Q>,
    {
        crate::group::group_by(key, self)
    }
}

impl<I: Iterator> SeqIteratorsExt for I {}
