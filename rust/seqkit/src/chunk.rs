//! Iterator adapters that split a sequence into fixed-size, padded chunks.
//!
//! Every chunk has exactly the requested number of cells. Cells are
//! `Option<T>`: the last chunk of a sequence whose length is not a multiple of
//! the chunk size is padded with `None`. An empty sequence yields no chunks,
//! and a sequence whose length is an exact multiple of the size yields no
//! trailing all-`None` chunk.

use std::iter::{Fuse, FusedIterator};

use seqkit_common::{Result, verify_arg};

/// An iterator adapter yielding `Vec<Option<T>>` chunks of a fixed length.
///
/// Created by [`chunks`] or [`Chunks::new`].
#[derive(Debug, Clone)]
pub struct Chunks<I: Iterator> {
    /// The underlying iterator.
    inner: Fuse<I>,
    /// The number of cells in each chunk.
    size: usize,
}

impl<I: Iterator> Chunks<I> {
    /// Creates a new `Chunks` iterator.
    ///
    /// Fails with `InvalidArgument` if `size` is 0.
    pub fn new(inner: I, size: usize) -> Result<Self> {
        verify_arg!(size, size > 0);
        Ok(Chunks {
            inner: inner.fuse(),
            size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<Option<I::Item>>;

    /// Pulls up to `size` elements and pads the chunk to full length.
    fn next(&mut self) -> Option<Self::Item> {
        let head = self.inner.next()?;
        let mut chunk = Vec::with_capacity(self.size);
        chunk.push(Some(head));
        chunk.extend(self.inner.by_ref().take(self.size - 1).map(Some));
        chunk.resize_with(self.size, || None);
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|n| n.div_ceil(self.size)),
        )
    }
}

impl<I: Iterator> FusedIterator for Chunks<I> {}

/// An iterator adapter yielding `[Option<T>; N]` chunks.
///
/// Same padding policy as [`Chunks`], with the chunk length fixed at compile
/// time. Created by [`array_chunks`] or [`ArrayChunks::new`].
#[derive(Debug, Clone)]
pub struct ArrayChunks<I: Iterator, const N: usize> {
    inner: Fuse<I>,
}

impl<I: Iterator, const N: usize> ArrayChunks<I, N> {
    /// Creates a new `ArrayChunks` iterator.
    ///
    /// Fails with `InvalidArgument` if `N` is 0.
    pub fn new(inner: I) -> Result<Self> {
        verify_arg!(N, N > 0);
        Ok(ArrayChunks {
            inner: inner.fuse(),
        })
    }
}

impl<I: Iterator, const N: usize> Iterator for ArrayChunks<I, N> {
    type Item = [Option<I::Item>; N];

    fn next(&mut self) -> Option<Self::Item> {
        let mut head = Some(self.inner.next()?);
        let inner = &mut self.inner;
        Some(std::array::from_fn(|i| {
            if i == 0 { head.take() } else { inner.next() }
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (lower.div_ceil(N), upper.map(|n| n.div_ceil(N)))
    }
}

impl<I: Iterator, const N: usize> FusedIterator for ArrayChunks<I, N> {}

/// Splits `iterable` into lazily produced chunks of exactly `size` cells.
///
/// ```
/// let chunks: Vec<_> = seqkit::chunks(3, [0, 1, 2, 3, 4]).unwrap().collect();
/// assert_eq!(chunks, [vec![Some(0), Some(1), Some(2)], vec![Some(3), Some(4), None]]);
///
/// assert!(seqkit::chunks(0, [1]).is_err());
/// ```
pub fn chunks<I: IntoIterator>(size: usize, iterable: I) -> Result<Chunks<I::IntoIter>> {
    Chunks::new(iterable.into_iter(), size)
}

/// Splits `iterable` into lazily produced `[Option<T>; N]` chunks.
pub fn array_chunks<const N: usize, I: IntoIterator>(
    iterable: I,
) -> Result<ArrayChunks<I::IntoIter, N>> {
    ArrayChunks::new(iterable.into_iter())
}
