//! First and last element retrieval.
//!
//! Neither function fails on empty input: an exhausted or empty source simply
//! yields `None`.

/// Returns the first element of `iterable`, or `None` if it is empty.
///
/// Only one element is pulled. Passing `&mut iter` leaves the rest of the
/// iterator in place, so repeated calls walk it forward and return `None`
/// once it is exhausted.
///
/// ```
/// let mut iter = std::iter::once(7);
/// assert_eq!(seqkit::first(&mut iter), Some(7));
/// assert_eq!(seqkit::first(&mut iter), None);
/// ```
pub fn first<I: IntoIterator>(iterable: I) -> Option<I::Item> {
    iterable.into_iter().next()
}

/// Returns the last element of `iterable`, or `None` if it is empty.
///
/// The whole input is traversed.
pub fn last<I: IntoIterator>(iterable: I) -> Option<I::Item> {
    iterable.into_iter().last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first() {
        assert_eq!(first((0..10).map(|x| x)), Some(0));
        assert_eq!(first(0..0), None);
        assert_eq!(first(vec!["a", "b"]), Some("a"));
        assert_eq!(first(&[0u8; 0]), None);
    }

    #[test]
    fn test_first_on_exhausted_source() {
        let mut iter = (0..1).map(|x| x * 2);
        assert_eq!(first(&mut iter), Some(0));
        assert_eq!(first(&mut iter), None);
        assert_eq!(first(&mut iter), None);
    }

    #[test]
    fn test_first_zero_is_not_absent() {
        assert_eq!(first([0]), Some(0));
        assert_eq!(first([""]), Some(""));
        assert_eq!(first([None::<u8>]), Some(None));
    }

    #[test]
    fn test_last() {
        assert_eq!(last((0..10).map(|x| x)), Some(9));
        assert_eq!(last(0..0), None);
        assert_eq!(last(0..5), Some(4));
        assert_eq!(last(vec!["a", "b"]), Some("b"));
    }

    #[test]
    fn test_last_consumes_input() {
        let mut iter = "hello".chars();
        assert_eq!(last(&mut iter), Some('o'));
        assert_eq!(iter.next(), None);
        assert_eq!(last(&mut iter), None);
    }
}
