//! Element counting.

/// Counts the elements of `iterable` by traversing it once.
///
/// A single-pass source is exhausted afterwards. The input must be finite.
pub fn count<I: IntoIterator>(iterable: I) -> usize {
    iterable.into_iter().count()
}
