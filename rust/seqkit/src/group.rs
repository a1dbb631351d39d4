//! Grouping of records by the value of a lookup key.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use ahash::AHashMap;
use seqkit_common::{Error, Result};

/// A record that can be queried by a key of type `Q`, such as a field name
/// or a position.
pub trait Lookup<Q: ?Sized> {
    /// The value a record yields for a key. Used as the bucket key when grouping.
    type Value: Eq + Hash + Clone;

    /// Returns the value stored under `key`, or `None` if the record lacks it.
    fn lookup(&self, key: &Q) -> Option<Self::Value>;
}

impl<Q, R> Lookup<Q> for &R
where
    Q: ?Sized,
    R: Lookup<Q> + ?Sized,
{
    type Value = R::Value;

    fn lookup(&self, key: &Q) -> Option<Self::Value> {
        (**self).lookup(key)
    }
}

impl<V, S> Lookup<str> for HashMap<String, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V> Lookup<str> for BTreeMap<String, V>
where
    V: Eq + Hash + Clone,
{
    type Value = V;

    fn lookup(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V> Lookup<usize> for [V]
where
    V: Eq + Hash + Clone,
{
    type Value = V;

    fn lookup(&self, key: &usize) -> Option<V> {
        self.get(*key).cloned()
    }
}

impl<V> Lookup<usize> for Vec<V>
where
    V: Eq + Hash + Clone,
{
    type Value = V;

    fn lookup(&self, key: &usize) -> Option<V> {
        self.as_slice().lookup(key)
    }
}

/// Elements partitioned into buckets by key.
///
/// Buckets are kept in the order their keys were first seen, and each bucket
/// keeps its elements in insertion order.
#[derive(Clone)]
pub struct Groups<K, V> {
    /// Buckets in first-appearance order of their keys.
    buckets: Vec<(K, Vec<V>)>,
    /// Maps a key to its position in `buckets`.
    index: AHashMap<K, usize>,
}

impl<K, V> Groups<K, V> {
    pub fn new() -> Groups<K, V> {
        Groups {
            buckets: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of grouped elements across all buckets.
    pub fn total_len(&self) -> usize {
        self.buckets.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.buckets
            .iter()
            .map(|(key, items)| (key, items.as_slice()))
    }
}

impl<K, V> Groups<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Appends `value` to the bucket for `key`, creating the bucket if needed.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&pos) => self.buckets[pos].1.push(value),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push((key, vec![value]));
            }
        }
    }

    /// Returns the bucket for `key`, if any element had that key.
    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let pos = *self.index.get(key)?;
        Some(self.buckets[pos].1.as_slice())
    }
}

impl<K, V> Default for Groups<K, V> {
    fn default() -> Self {
        Groups::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Groups<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl<K: Eq, V: Eq> Eq for Groups<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Groups<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Groups<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut groups = Groups::new();
        for (key, value) in iter {
            groups.push(key, value);
        }
        groups
    }
}

impl<K, V> IntoIterator for Groups<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Groups records by the value each one holds under `key`.
///
/// Fails with [`ErrorKind::MissingKey`](seqkit_common::ErrorKind::MissingKey)
/// on the first record that has no value for `key`; no partial result is
/// returned.
///
/// ```
/// use std::collections::HashMap;
///
/// let users: Vec<HashMap<String, String>> = [("f", "33"), ("m", "20"), ("f", "21")]
///     .into_iter()
///     .map(|(g, a)| HashMap::from([("gender".into(), g.into()), ("age".into(), a.into())]))
///     .collect();
///
/// let groups = seqkit::group_by("gender", &users).unwrap();
/// assert_eq!(groups.keys().collect::<Vec<_>>(), ["f", "m"]);
/// assert_eq!(groups.get("f").unwrap().len(), 2);
/// ```
pub fn group_by<Q, I>(
    key: &Q,
    iterable: I,
) -> Result<Groups<<I::Item as Lookup<Q>>::Value, I::Item>>
where
    Q: fmt::Display + ?Sized,
    I: IntoIterator,
    I::Item: Lookup<Q>,
{
    let mut groups = Groups::new();
    for (index, item) in iterable.into_iter().enumerate() {
        let Some(value) = item.lookup(key) else {
            log::debug!("group_by: element #{index} has no key '{key}'");
            return Err(Error::missing_key(key.to_string(), index));
        };
        groups.push(value, item);
    }
    log::trace!(
        "group_by '{key}': {} elements in {} groups",
        groups.total_len(),
        groups.len()
    );
    Ok(groups)
}

/// Groups elements by the key `key_fn` computes for each of them.
pub fn group_by_key<I, K, F>(iterable: I, mut key_fn: F) -> Groups<K, I::Item>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    iterable
        .into_iter()
        .map(|item| (key_fn(&item), item))
        .collect()
}
