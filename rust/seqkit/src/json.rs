//! Bindings of the sequence operations to `serde_json::Value`.
//!
//! JSON arrays are sequences and JSON objects are records:
//!
//! - [`Nest`] is implemented for `Value`: arrays are branches, everything else
//!   (strings and objects included) is a leaf.
//! - [`Lookup<str>`] is implemented for `Value` and `Map`: objects are queried
//!   by field name. [`Lookup<usize>`] queries arrays by position.
//! - [`count_value`], [`first_value`] and [`last_value`] accept any `Value`.
//!   The element accessors return `None` for non-array input instead of
//!   failing.

use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Either;
use serde_json::{Map, Value};
use seqkit_common::{Error, Result};

use crate::ends::{first, last};
use crate::flatten::Nest;
use crate::group::{Groups, Lookup};

impl Nest for Value {
    type Leaf = Value;
    type Children = std::vec::IntoIter<Value>;

    fn expand(self) -> Either<Value, Self::Children> {
        match self {
            Value::Array(items) => Either::Right(items.into_iter()),
            other => Either::Left(other),
        }
    }
}

/// A JSON value usable as a hash key.
///
/// Equality is `Value` equality. Objects hash by size only, so key order
/// within an object never affects the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonKey(pub Value);

impl JsonKey {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Text used when the key has to become an object field name: strings
    /// are used as-is, other values are rendered as JSON.
    pub fn to_field_name(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    std::mem::discriminant(value).hash(state);
    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(state),
        Value::Number(n) => n.hash(state),
        Value::String(s) => s.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            items.iter().for_each(|item| hash_value(item, state));
        }
        Value::Object(fields) => fields.len().hash(state),
    }
}

impl Hash for JsonKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

impl fmt::Display for JsonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Value> for JsonKey {
    fn from(value: Value) -> Self {
        JsonKey(value)
    }
}

impl From<&str> for JsonKey {
    fn from(value: &str) -> Self {
        JsonKey(Value::String(value.to_string()))
    }
}

impl From<JsonKey> for Value {
    fn from(key: JsonKey) -> Self {
        key.0
    }
}

impl Lookup<str> for Value {
    type Value = JsonKey;

    fn lookup(&self, key: &str) -> Option<JsonKey> {
        self.as_object()?.lookup(key)
    }
}

impl Lookup<str> for Map<String, Value> {
    type Value = JsonKey;

    fn lookup(&self, key: &str) -> Option<JsonKey> {
        self.get(key).cloned().map(JsonKey)
    }
}

impl Lookup<usize> for Value {
    type Value = JsonKey;

    fn lookup(&self, key: &usize) -> Option<JsonKey> {
        self.as_array()?.get(*key).cloned().map(JsonKey)
    }
}

/// Renders groups as an array of `{"key": ..., "items": [...]}` objects.
///
/// An array keeps the first-appearance order of the buckets, which a JSON
/// object would not.
impl<V: Into<Value>> From<Groups<JsonKey, V>> for Value {
    fn from(groups: Groups<JsonKey, V>) -> Self {
        Value::Array(
            groups
                .into_iter()
                .map(|(key, items)| {
                    let mut bucket = Map::new();
                    bucket.insert("key".to_string(), key.into_value());
                    bucket.insert(
                        "items".to_string(),
                        Value::Array(items.into_iter().map(Into::into).collect()),
                    );
                    Value::Object(bucket)
                })
                .collect(),
        )
    }
}

/// Number of elements of an array or entries of an object; `None` for scalars.
pub fn count_value(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(fields) => Some(fields.len()),
        _ => None,
    }
}

/// First element of an array; `None` if the array is empty or `value` is not
/// an array.
pub fn first_value(value: &Value) -> Option<&Value> {
    value.as_array().and_then(first)
}

/// Last element of an array; `None` if the array is empty or `value` is not
/// an array.
pub fn last_value(value: &Value) -> Option<&Value> {
    value.as_array().and_then(last)
}

/// Unwraps an array, failing with `NotAnArray` for any other value.
pub fn into_array(value: Value, operation: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(Error::not_an_array(operation)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{chunks, distinct, flatten, group_by};

    #[test]
    fn test_flatten_json() {
        let doc = json!(["ab", ["cd", ["ef", "gh"]], {"x": [1]}, []]);
        let leaves: Vec<Value> = flatten(into_array(doc, "flatten").unwrap()).collect();
        assert_eq!(
            leaves,
            vec![
                json!("ab"),
                json!("cd"),
                json!("ef"),
                json!("gh"),
                json!({"x": [1]})
            ]
        );
    }

    #[test]
    fn test_json_key_hash_consistency() {
        let a: JsonKey = json!({"a": 1, "b": [true, null]}).into();
        let b: JsonKey = json!({"b": [true, null], "a": 1}).into();
        assert_eq!(a, b);
        assert_eq!(ahash_of(&a), ahash_of(&b));

        assert_ne!(JsonKey(json!(1)), JsonKey(json!("1")));
        assert_eq!(JsonKey::from("x").to_field_name(), "x");
        assert_eq!(JsonKey(json!(1.5)).to_field_name(), "1.5");
    }

    fn ahash_of(key: &JsonKey) -> u64 {
        ahash::RandomState::with_seeds(1, 2, 3, 4).hash_one(key)
    }

    #[test]
    fn test_json_key_signed_zero() {
        let pos: Value = serde_json::from_str("0.0").unwrap();
        let neg: Value = serde_json::from_str("-0.0").unwrap();
        let (pos, neg) = (JsonKey(pos), JsonKey(neg));
        assert_eq!(pos, neg);
        assert_eq!(ahash_of(&pos), ahash_of(&neg));

        assert_eq!(distinct(vec![pos, neg]).len(), 1);

        let records: Value = serde_json::from_str(r#"[{"k": 0.0}, {"k": -0.0}]"#).unwrap();
        let groups = group_by("k", into_array(records, "group_by").unwrap()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.total_len(), 2);
    }

    #[test]
    fn test_distinct_json() {
        let values = vec![json!(1), json!("1"), json!(1), json!([1]), json!("1")];
        let unique = distinct(values.into_iter().map(JsonKey));
        assert_eq!(
            unique.into_iter().map(JsonKey::into_value).collect::<Vec<_>>(),
            vec![json!(1), json!("1"), json!([1])]
        );
    }

    #[test]
    fn test_group_json_records() {
        let users = json!([
            {"gender": "female", "age": 33},
            {"gender": "male", "age": 20},
            {"gender": "female", "age": 21},
        ]);
        let records = into_array(users, "group_by").unwrap();
        let groups = group_by("gender", records).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups.get(&JsonKey::from("female")).unwrap(),
            &[
                json!({"gender": "female", "age": 33}),
                json!({"gender": "female", "age": 21})
            ]
        );

        let rendered: Value = groups.into();
        assert_eq!(rendered[0]["key"], json!("female"));
        assert_eq!(rendered[1]["key"], json!("male"));
        assert_eq!(rendered[1]["items"], json!([{"gender": "male", "age": 20}]));
    }

    #[test]
    fn test_group_json_missing_key() {
        let records = vec![json!({"gender": "male"}), json!(42)];
        let err = group_by("gender", &records).unwrap_err();
        assert!(err.is_missing_key());
        assert_eq!(err.to_string(), "element #1 has no key 'gender'");
    }

    #[test]
    fn test_group_json_by_position() {
        let rows = vec![json!(["a", 1]), json!(["b", 2]), json!(["a", 3])];
        let groups = group_by(&0usize, &rows).unwrap();
        assert_eq!(
            groups.keys().map(JsonKey::to_field_name).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_count_first_last_value() {
        assert_eq!(count_value(&json!([1, 2, 3])), Some(3));
        assert_eq!(count_value(&json!({"1": "a", "2": "b"})), Some(2));
        assert_eq!(count_value(&json!("abc")), None);

        assert_eq!(first_value(&json!([4, 5])), Some(&json!(4)));
        assert_eq!(last_value(&json!([4, 5])), Some(&json!(5)));
        assert_eq!(first_value(&json!([])), None);
        assert_eq!(last_value(&json!([])), None);
        assert_eq!(last_value(&json!(5)), None);
        assert_eq!(last_value(&json!({"a": 1})), None);
        assert_eq!(first_value(&Value::Null), None);
        assert_eq!(first_value(&json!([null])), Some(&Value::Null));
    }

    #[test]
    fn test_chunks_json() {
        let items = into_array(json!([1, 2, 3]), "chunks").unwrap();
        let rendered: Vec<Value> = chunks(2, items)
            .unwrap()
            .map(|chunk| {
                Value::Array(
                    chunk
                        .into_iter()
                        .map(|cell| cell.unwrap_or(Value::Null))
                        .collect(),
                )
            })
            .collect();
        assert_eq!(rendered, vec![json!([1, 2]), json!([3, null])]);
    }

    #[test]
    fn test_into_array_rejects_scalars() {
        let err = into_array(json!({"a": 1}), "count").unwrap_err();
        assert_eq!(err.to_string(), "count expects a JSON array");
    }
}
