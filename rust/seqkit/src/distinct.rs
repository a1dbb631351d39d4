//! Order-preserving deduplication.

use std::hash::Hash;

use itertools::Itertools;

/// Returns the elements of `iterable` with duplicates removed, keeping the
/// first occurrence of each in its original position.
///
/// The whole input is consumed before returning.
///
/// ```
/// assert_eq!(seqkit::distinct([1, 2, 0, 1, 3, 0, 2]), [1, 2, 0, 3]);
/// ```
pub fn distinct<I>(iterable: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let result: Vec<_> = iterable.into_iter().unique().collect();
    log::trace!("distinct: {} unique elements", result.len());
    result
}

/// Like [`distinct`], but two elements are duplicates when `key_fn` maps them
/// to equal keys.
pub fn distinct_by<I, K, F>(iterable: I, key_fn: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    iterable.into_iter().unique_by(key_fn).collect()
}
